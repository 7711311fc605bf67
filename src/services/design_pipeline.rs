use std::path::PathBuf;
use std::time::Duration;

use bead_mosaic::{MosaicDesigner, Palette};

use crate::error::{ConfigError, DesignError, RenderError};
use crate::models::DesignReport;
use crate::rendering::{CanvasRenderer, LabelFont};
use crate::services::fetcher::ImageFetcher;

/// Options for one design run.
#[derive(Debug, Clone)]
pub struct DesignOptions {
    /// Upscale factor applied after the half downscale.
    pub magnification: u32,
    /// Tile edge length before magnification.
    pub base_tile: u32,
    /// Paint tiles solid with their matched palette color.
    pub replace_colors: bool,
    /// Draw the matched color name centered in each tile.
    pub draw_labels: bool,
    /// Where to write the rendered canvas. Required when either
    /// `replace_colors` or `draw_labels` is set.
    pub output_path: Option<PathBuf>,
    /// Explicit label font; falls back to a system font lookup.
    pub font_path: Option<PathBuf>,
    /// HTTP request timeout for the source fetch.
    pub timeout: Duration,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            magnification: MosaicDesigner::DEFAULT_MAGNIFICATION,
            base_tile: MosaicDesigner::DEFAULT_BASE_TILE,
            replace_colors: true,
            draw_labels: false,
            output_path: None,
            font_path: None,
            timeout: ImageFetcher::DEFAULT_TIMEOUT,
        }
    }
}

impl DesignOptions {
    /// True when a canvas must be rendered and persisted.
    pub fn render_requested(&self) -> bool {
        self.replace_colors || self.draw_labels
    }
}

/// The bead design pipeline: Fetch -> Decode -> Resize -> Scan -> Render ->
/// Aggregate, strictly sequential and non-resumable.
///
/// The palette is injected at construction -- the pipeline reads no hidden
/// file-system state, so a run is a pure function of the source URL content,
/// the palette and the options. Each run exclusively owns its raster
/// buffers; everything is dropped when the run ends, on success or failure.
/// A pipeline holds no mutable state, so independent runs may execute
/// concurrently from separate pipeline instances sharing a palette.
pub struct DesignPipeline {
    palette: Palette,
    options: DesignOptions,
    fetcher: ImageFetcher,
}

impl DesignPipeline {
    /// Build a pipeline around an injected palette.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutputPathRequired`] when rendering is
    /// requested without an output path, and [`crate::error::FetchError`]
    /// if the HTTP client cannot be built. Both fail before any work runs.
    pub fn new(palette: Palette, options: DesignOptions) -> Result<Self, DesignError> {
        if options.render_requested() && options.output_path.is_none() {
            return Err(ConfigError::OutputPathRequired.into());
        }
        let fetcher = ImageFetcher::new(options.timeout)?;
        Ok(Self {
            palette,
            options,
            fetcher,
        })
    }

    /// The options this pipeline runs with.
    pub fn options(&self) -> &DesignOptions {
        &self.options
    }

    /// Execute one design run.
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the run with the corresponding
    /// [`DesignError`] variant; no partial report is produced and no output
    /// file is written.
    pub fn run(&self, url: &str) -> Result<DesignReport, DesignError> {
        tracing::info!(url, palette = self.palette.len(), "Starting bead design run");

        let source = self.fetcher.fetch(url)?;
        tracing::debug!(
            width = source.width(),
            height = source.height(),
            "Decoded source image"
        );

        let designer = MosaicDesigner::new(self.palette.clone())
            .magnification(self.options.magnification)
            .base_tile(self.options.base_tile);
        let design = designer.design(&source)?;
        tracing::debug!(
            working_width = design.working().width(),
            working_height = design.working().height(),
            tile_size = design.tile_size(),
            tiles = design.total_beads(),
            "Scanned and matched tiles"
        );

        let image_name = match &self.options.output_path {
            Some(path) if self.options.render_requested() => {
                let font = if self.options.draw_labels {
                    Some(LabelFont::resolve(self.options.font_path.as_deref())?)
                } else {
                    None
                };
                let renderer = CanvasRenderer::new(
                    self.options.replace_colors,
                    self.options.draw_labels,
                    self.options.magnification,
                    font,
                );
                let canvas = renderer.render(&design)?;
                canvas.save(path).map_err(|source| RenderError::Save {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), "Wrote design canvas");
                path.file_name().map(|n| n.to_string_lossy().into_owned())
            }
            _ => None,
        };

        let report = DesignReport::from_design(&design, image_name);
        tracing::info!(
            total_beads = report.total_beads,
            colors = report.color_statistics.len(),
            "Design run complete"
        );
        Ok(report)
    }
}
