use std::path::Path;

use bead_mosaic::{Palette, PaletteEntry, Rgb};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// One reference color in a palette template document.
///
/// Channels are typed `u8`, so out-of-range values in the document fail at
/// parse time as a [`ConfigError::Parse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorSpec {
    /// Channel values, `[r, g, b]`
    pub rgb: [u8; 3],
    /// Display hex string, carried verbatim into the palette
    pub hex: String,
}

/// Catalog of palette templates loaded from a JSON color card document:
///
/// ```json
/// {
///   "classic": {
///     "red":   { "rgb": [255, 0, 0],     "hex": "#FF0000" },
///     "white": { "rgb": [255, 255, 255], "hex": "#FFFFFF" }
///   }
/// }
/// ```
///
/// Template and color maps are order-preserving (`IndexMap`): the document's
/// color order becomes the palette's iteration order, which decides
/// nearest-color ties. A plain hash map here would silently randomize an
/// observable contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PaletteCatalog {
    templates: IndexMap<String, IndexMap<String, ColorSpec>>,
}

impl PaletteCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid catalog document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            templates = catalog.templates.len(),
            "Loaded palette catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template names in document order.
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Number of colors in a template, if it exists.
    pub fn color_count(&self, key: &str) -> Option<usize> {
        self.templates.get(key).map(IndexMap::len)
    }

    /// Build the palette for a template, preserving document color order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TemplateNotFound`] (listing the available
    /// template names) for an unknown key, and [`ConfigError::Palette`] if
    /// the template is empty. Never falls back to another template.
    pub fn template(&self, key: &str) -> Result<Palette, ConfigError> {
        let colors = self
            .templates
            .get(key)
            .ok_or_else(|| ConfigError::TemplateNotFound {
                key: key.to_string(),
                available: self.template_names().collect::<Vec<_>>().join(", "),
            })?;

        let entries = colors
            .iter()
            .map(|(name, spec)| {
                PaletteEntry::with_hex(name.clone(), Rgb::from_bytes(spec.rgb), spec.hex.clone())
            })
            .collect();

        Palette::new(entries).map_err(|source| ConfigError::Palette {
            key: key.to_string(),
            source,
        })
    }
}
