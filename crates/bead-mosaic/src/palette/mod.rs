//! Ordered color palettes with nearest-color matching.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PaletteEntry};
