//! Mosaic design output types.

mod design;

pub use design::{BillOfMaterials, MatchedTile, MosaicDesign};
