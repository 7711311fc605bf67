use std::path::Path;

use ab_glyph::{FontArc, FontVec};

use crate::error::RenderError;

/// A label typeface resolved for canvas rendering.
///
/// Resolution order: an explicit font file wins; otherwise the system font
/// database is queried for a generic family. Labeling with no resolvable
/// font is a hard error -- labels are never silently skipped.
#[derive(Clone)]
pub struct LabelFont {
    font: FontArc,
}

impl LabelFont {
    /// Load a font from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontLoad`] if the file cannot be read and
    /// [`RenderError::FontParse`] if it is not a usable font.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let data = std::fs::read(path).map_err(|source| RenderError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| RenderError::FontParse {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            font: FontArc::from(font),
        })
    }

    /// Locate a system font, preferring sans-serif families.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontUnavailable`] when no generic family
    /// resolves to a parseable face.
    pub fn from_system() -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        for family in [
            fontdb::Family::SansSerif,
            fontdb::Family::Serif,
            fontdb::Family::Monospace,
        ] {
            let query = fontdb::Query {
                families: &[family],
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            let Some(id) = db.query(&query) else {
                continue;
            };
            let loaded = db
                .with_face_data(id, |data, index| {
                    FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
                })
                .flatten();
            if let Some(font) = loaded {
                return Ok(Self {
                    font: FontArc::from(font),
                });
            }
        }

        Err(RenderError::FontUnavailable)
    }

    /// Resolve a font: explicit path if given, system lookup otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`from_path`](Self::from_path) and
    /// [`from_system`](Self::from_system).
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, RenderError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => Self::from_system(),
        }
    }

    /// The glyph font for drawing.
    pub(crate) fn font(&self) -> &FontArc {
        &self.font
    }
}
