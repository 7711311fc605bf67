//! Grid tiling and per-tile color averaging.
//!
//! The working image is partitioned into square tiles scanned row-major from
//! the origin. Tiles at the right and bottom edges are clipped to the image
//! bounds; they stay in the scan with their reduced size, never skipped or
//! padded.

use crate::raster::Raster;

/// One grid cell before palette matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Stable cell identifier, `"{x}_{y}"` of the tile origin.
    pub cell_id: String,
    /// Tile origin, left edge.
    pub x: u32,
    /// Tile origin, top edge.
    pub y: u32,
    /// Clipped tile width; equals the tile size except at the right edge.
    pub width: u32,
    /// Clipped tile height; equals the tile size except at the bottom edge.
    pub height: u32,
    /// Per-channel arithmetic mean over the clipped box, unrounded.
    pub average: [f64; 3],
}

/// Number of tiles a raster of the given size yields:
/// `ceil(width / tile_size) * ceil(height / tile_size)`.
pub fn tile_count(width: u32, height: u32, tile_size: u32) -> u64 {
    u64::from(width.div_ceil(tile_size)) * u64::from(height.div_ceil(tile_size))
}

/// Partition a raster into tiles and compute each tile's mean color.
///
/// Origins step by `tile_size` in row-major order starting at `(0, 0)`;
/// each bounding box is clipped against the image edges. The mean is
/// real-valued: no rounding happens before palette matching.
///
/// # Panics (debug only)
///
/// Debug-asserts `tile_size > 0`.
pub fn scan(raster: &Raster, tile_size: u32) -> Vec<Tile> {
    debug_assert!(tile_size > 0, "tile size must be non-zero");

    let width = raster.width();
    let height = raster.height();
    let mut tiles = Vec::with_capacity(tile_count(width, height, tile_size) as usize);

    let mut y = 0;
    while y < height {
        let tile_h = tile_size.min(height - y);
        let mut x = 0;
        while x < width {
            let tile_w = tile_size.min(width - x);

            let mut sum = [0.0f64; 3];
            for yy in y..y + tile_h {
                for xx in x..x + tile_w {
                    let [r, g, b] = raster.pixel(xx, yy).to_f64();
                    sum[0] += r;
                    sum[1] += g;
                    sum[2] += b;
                }
            }
            let count = f64::from(tile_w) * f64::from(tile_h);

            tiles.push(Tile {
                cell_id: format!("{x}_{y}"),
                x,
                y,
                width: tile_w,
                height: tile_h,
                average: [sum[0] / count, sum[1] / count, sum[2] / count],
            });

            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}
