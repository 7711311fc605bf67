//! MosaicDesigner builder -- the primary entry point for the crate.

use crate::api::error::MosaicError;
use crate::grid;
use crate::output::{MatchedTile, MosaicDesign};
use crate::palette::Palette;
use crate::preprocess::{downscale_half, upscale};
use crate::raster::Raster;

/// High-level mosaic builder.
///
/// `MosaicDesigner` wraps the complete construction pipeline (two resize
/// passes, grid scan, nearest-color matching) behind a fluent builder with
/// the standard defaults: magnification 5, base tile 10, giving a tile edge
/// of 50 working pixels.
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`design()`](Self::design) takes `&self` so the builder is reusable
///   across multiple source images
///
/// # Example
///
/// ```
/// use bead_mosaic::{MosaicDesigner, Palette, PaletteEntry, Raster, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("black", Rgb::new(0, 0, 0)),
///     PaletteEntry::new("white", Rgb::new(255, 255, 255)),
/// ]).unwrap();
///
/// let source = Raster::filled(4, 4, Rgb::new(250, 250, 250));
/// let design = MosaicDesigner::new(palette)
///     .magnification(1)
///     .base_tile(2)
///     .design(&source)
///     .unwrap();
///
/// assert_eq!(design.total_beads(), 1);
/// assert_eq!(design.tiles()[0].color.name, "white");
/// ```
pub struct MosaicDesigner {
    palette: Palette,
    magnification: u32,
    base_tile: u32,
}

impl MosaicDesigner {
    /// Default magnification factor applied after the half downscale.
    pub const DEFAULT_MAGNIFICATION: u32 = 5;

    /// Default tile edge length before magnification.
    pub const DEFAULT_BASE_TILE: u32 = 10;

    /// Create a designer with the given palette and default sizing.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            magnification: Self::DEFAULT_MAGNIFICATION,
            base_tile: Self::DEFAULT_BASE_TILE,
        }
    }

    /// Set the magnification factor for the upscale pass.
    #[inline]
    pub fn magnification(mut self, magnification: u32) -> Self {
        self.magnification = magnification;
        self
    }

    /// Set the base tile edge length (multiplied by magnification).
    #[inline]
    pub fn base_tile(mut self, base_tile: u32) -> Self {
        self.base_tile = base_tile;
        self
    }

    /// The tile edge length on the working image.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.base_tile * self.magnification
    }

    /// The palette this designer matches against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build a mosaic design from a source raster.
    ///
    /// Runs the fixed pipeline:
    /// 1. Downscale to `(width / 2, height / 2)`, nearest-neighbor
    /// 2. Upscale by the magnification factor, nearest-neighbor
    /// 3. Scan tiles row-major with clipped edge tiles
    /// 4. Match each tile's mean color to the nearest palette entry
    ///
    /// The designer is reusable -- `design()` takes `&self`.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::SourceTooSmall`] for sources under 2x2 and
    /// [`MosaicError::InvalidMagnification`] /
    /// [`MosaicError::InvalidBaseTile`] for zero sizing parameters. All
    /// validation happens before any pixel work.
    pub fn design(&self, source: &Raster) -> Result<MosaicDesign, MosaicError> {
        if self.magnification == 0 {
            return Err(MosaicError::InvalidMagnification(self.magnification));
        }
        if self.base_tile == 0 {
            return Err(MosaicError::InvalidBaseTile(self.base_tile));
        }
        if source.width() < 2 || source.height() < 2 {
            return Err(MosaicError::SourceTooSmall {
                width: source.width(),
                height: source.height(),
            });
        }

        let reduced = downscale_half(source);
        let working = upscale(&reduced, self.magnification);
        let tile_size = self.tile_size();

        let tiles = grid::scan(&working, tile_size)
            .into_iter()
            .map(|tile| {
                let (idx, distance) = self.palette.find_nearest(tile.average);
                MatchedTile::new(tile, self.palette.entry(idx).clone(), distance)
            })
            .collect();

        Ok(MosaicDesign::new(working, tile_size, tiles))
    }
}
