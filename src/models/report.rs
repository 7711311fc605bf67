use std::collections::BTreeMap;

use bead_mosaic::MosaicDesign;
use indexmap::IndexMap;
use serde::Serialize;

/// Tile origin on the working image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Clipped tile dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// The palette entry a tile resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedColor {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
}

/// One grid cell of the finished design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRecord {
    pub position: Position,
    pub size: Size,
    pub avg_color: [f64; 3],
    pub matched_color: MatchedColor,
}

/// The entry-point output of a design run.
///
/// `tiles` maps cell ids to tile records in scan order; `image_name` is the
/// file name of the rendered canvas and is absent when no rendering was
/// requested. Color statistics carry counts only -- their ordering has no
/// meaning (a sorted map keeps serialization stable).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub tiles: IndexMap<String, TileRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    pub color_statistics: BTreeMap<String, u64>,
    pub total_beads: u64,
}

impl DesignReport {
    /// Build the report from a completed design.
    pub fn from_design(design: &MosaicDesign, image_name: Option<String>) -> Self {
        let tiles = design
            .tiles()
            .iter()
            .map(|tile| {
                (
                    tile.cell_id.clone(),
                    TileRecord {
                        position: Position {
                            x: tile.x,
                            y: tile.y,
                        },
                        size: Size {
                            width: tile.width,
                            height: tile.height,
                        },
                        avg_color: tile.average,
                        matched_color: MatchedColor {
                            name: tile.color.name.clone(),
                            hex: tile.color.hex.clone(),
                            rgb: tile.color.rgb.to_bytes(),
                        },
                    },
                )
            })
            .collect();

        let color_statistics = design.color_statistics().into_iter().collect();

        Self {
            tiles,
            image_name,
            color_statistics,
            total_beads: design.total_beads(),
        }
    }
}
