//! bead-mosaic: palette-matched bead mosaic construction
//!
//! This library turns a raster image into a bead mosaic design: a grid of
//! tiles, each mapped to the nearest color of a finite reference palette,
//! ready for rendering and per-color bead counting.
//!
//! # Quick Start
//!
//! The [`MosaicDesigner`] builder is the primary entry point:
//!
//! ```
//! use bead_mosaic::{MosaicDesigner, Palette, PaletteEntry, Raster, Rgb};
//!
//! let palette = Palette::new(vec![
//!     PaletteEntry::new("black", Rgb::new(0, 0, 0)),
//!     PaletteEntry::new("white", Rgb::new(255, 255, 255)),
//! ]).unwrap();
//!
//! let source = Raster::filled(20, 20, Rgb::new(245, 245, 245));
//! let design = MosaicDesigner::new(palette)
//!     .magnification(1)
//!     .design(&source)
//!     .unwrap();
//!
//! assert_eq!(design.total_beads(), 1);
//! assert_eq!(design.bill_of_materials().count("white"), 1);
//! ```
//!
//! # Pipeline
//!
//! [`MosaicDesigner::design`] runs a fixed, strictly sequential pipeline:
//!
//! 1. **Downscale** the source to half its dimensions (nearest-neighbor) to
//!    suppress noise before quantization
//! 2. **Upscale** by the magnification factor (nearest-neighbor) to set the
//!    grid granularity; the tile edge is `base_tile * magnification`
//! 3. **Scan** the working image into row-major tiles, clipping edge tiles
//!    against the image bounds
//! 4. **Match** each tile's unrounded mean color to the nearest palette
//!    entry by Euclidean RGB distance
//!
//! Both resize passes are nearest-neighbor on purpose: the working image
//! only ever contains colors present in the source, so tile averages never
//! reflect interpolation artifacts.
//!
//! # Determinism
//!
//! A design is a pure function of the source pixels, the palette and the
//! sizing parameters. The one subtle contract is the nearest-color
//! tie-break: entries are scanned in palette order and equidistant entries
//! resolve to the earliest one. See [`Palette::find_nearest`].

pub mod api;
pub mod color;
pub mod grid;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{MosaicDesigner, MosaicError};
pub use color::{ParseColorError, Rgb};
pub use output::{BillOfMaterials, MatchedTile, MosaicDesign};
pub use palette::{Palette, PaletteEntry, PaletteError};
pub use raster::Raster;
