//! MosaicDesign: the canonical output of the construction pipeline.
//!
//! A design pairs the working raster with the matched tile set. Tiles are
//! immutable once computed; the bill of materials is derived on demand.

use std::collections::HashMap;

use crate::grid::{tile_count, Tile};
use crate::palette::PaletteEntry;
use crate::raster::Raster;

/// A grid cell with its palette match.
///
/// `color` is a clone of the winning palette entry -- the palette's own RGB
/// and hex, not the raw average, so downstream rendering snaps to the fixed
/// reference colors.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedTile {
    /// Stable cell identifier, `"{x}_{y}"` of the tile origin.
    pub cell_id: String,
    /// Tile origin, left edge.
    pub x: u32,
    /// Tile origin, top edge.
    pub y: u32,
    /// Clipped tile width.
    pub width: u32,
    /// Clipped tile height.
    pub height: u32,
    /// Per-channel mean over the clipped box, unrounded.
    pub average: [f64; 3],
    /// The winning palette entry.
    pub color: PaletteEntry,
    /// Euclidean RGB distance from `average` to `color`.
    pub distance: f64,
}

impl MatchedTile {
    /// Attach a palette match to a scanned tile.
    pub fn new(tile: Tile, color: PaletteEntry, distance: f64) -> Self {
        Self {
            cell_id: tile.cell_id,
            x: tile.x,
            y: tile.y,
            width: tile.width,
            height: tile.height,
            average: tile.average,
            color,
            distance,
        }
    }
}

/// The completed mosaic: working image, tile size and matched tiles.
pub struct MosaicDesign {
    working: Raster,
    tile_size: u32,
    tiles: Vec<MatchedTile>,
}

impl MosaicDesign {
    /// Assemble a design from its parts.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the tile count matches the working dimensions.
    pub fn new(working: Raster, tile_size: u32, tiles: Vec<MatchedTile>) -> Self {
        debug_assert_eq!(
            tiles.len() as u64,
            tile_count(working.width(), working.height(), tile_size),
            "tile count must match working dimensions",
        );
        Self {
            working,
            tile_size,
            tiles,
        }
    }

    /// The working image the grid was scanned on.
    #[inline]
    pub fn working(&self) -> &Raster {
        &self.working
    }

    /// Tile edge length on the working image.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Matched tiles in scan (row-major) order.
    #[inline]
    pub fn tiles(&self) -> &[MatchedTile] {
        &self.tiles
    }

    /// Total number of beads (= tiles) in the design.
    #[inline]
    pub fn total_beads(&self) -> u64 {
        self.tiles.len() as u64
    }

    /// Per-color bead counts. Only the counts are meaningful; the map
    /// carries no ordering.
    pub fn color_statistics(&self) -> HashMap<String, u64> {
        self.bill_of_materials().into_counts()
    }

    /// Tally the bill of materials for this design.
    pub fn bill_of_materials(&self) -> BillOfMaterials {
        BillOfMaterials::tally(&self.tiles)
    }
}

/// Per-color bead counts for a completed design.
#[derive(Debug, Clone, PartialEq)]
pub struct BillOfMaterials {
    counts: HashMap<String, u64>,
    total: u64,
}

impl BillOfMaterials {
    /// Count beads per color name over a tile set.
    pub fn tally(tiles: &[MatchedTile]) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.color.name.clone()).or_default() += 1;
        }
        Self {
            counts,
            total: tiles.len() as u64,
        }
    }

    /// Count for a single color name (0 if the color is unused).
    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// All per-color counts.
    #[inline]
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Total bead count; always equals the sum of the per-color counts.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Consume into the underlying counts map.
    pub fn into_counts(self) -> HashMap<String, u64> {
        self.counts
    }
}
