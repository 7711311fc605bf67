//! Domain-critical regression tests for bead-mosaic.
//!
//! These tests exercise the full construction pipeline across modules and
//! document the contract each one guards.

use crate::color::Rgb;
use crate::grid;
use crate::palette::{Palette, PaletteEntry};
use crate::raster::Raster;
use crate::MosaicDesigner;

fn red_white_palette() -> Palette {
    Palette::new(vec![
        PaletteEntry::new("red", Rgb::new(255, 0, 0)),
        PaletteEntry::new("white", Rgb::new(255, 255, 255)),
    ])
    .unwrap()
}

/// A raster whose left half is red and right half is white.
fn half_red_white(width: u32, height: u32) -> Raster {
    let red = Rgb::new(255, 0, 0);
    let white = Rgb::new(255, 255, 255);
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| if x < width / 2 { red } else { white }))
        .collect();
    Raster::new(width, height, pixels)
}

/// The reference scenario at the grid level: a 20x20 working image, left
/// half red and right half white, tile size 10 -> four tiles that match
/// two red and two white with zero distance.
#[test]
fn test_half_red_white_grid_scenario() {
    let working = half_red_white(20, 20);
    let palette = red_white_palette();

    let tiles = grid::scan(&working, 10);
    assert_eq!(tiles.len(), 4);

    let names: Vec<&str> = tiles
        .iter()
        .map(|t| {
            let (idx, dist) = palette.find_nearest(t.average);
            assert_eq!(dist, 0.0, "solid tiles must match at distance 0");
            palette.entry(idx).name.as_str()
        })
        .collect();

    // Row-major: left tile red, right tile white, per row.
    assert_eq!(names, ["red", "white", "red", "white"]);
}

/// The same scenario end to end: a 40x40 source halves to 20x20, stays
/// 20x20 at magnification 1, and tiles into a 2x2 grid of solid colors.
#[test]
fn test_half_red_white_full_pipeline() {
    let source = half_red_white(40, 40);
    let design = MosaicDesigner::new(red_white_palette())
        .magnification(1)
        .base_tile(10)
        .design(&source)
        .unwrap();

    assert_eq!(design.working().width(), 20);
    assert_eq!(design.working().height(), 20);
    assert_eq!(design.total_beads(), 4);

    let bom = design.bill_of_materials();
    assert_eq!(bom.count("red"), 2);
    assert_eq!(bom.count("white"), 2);
    assert_eq!(bom.total(), 4);
}

/// If this breaks: the bill of materials no longer accounts for every
/// tile, or the tile count diverges from ceil(w/ts) * ceil(h/ts).
#[test]
fn test_statistics_sum_equals_tile_count() {
    let source = half_red_white(50, 34);
    let design = MosaicDesigner::new(red_white_palette())
        .magnification(2)
        .base_tile(7)
        .design(&source)
        .unwrap();

    let working = design.working();
    let expected = grid::tile_count(working.width(), working.height(), design.tile_size());

    let sum: u64 = design.color_statistics().values().sum();
    assert_eq!(sum, design.total_beads());
    assert_eq!(design.total_beads(), expected);
}

/// If this breaks: the working image no longer has the contractual
/// dimensions `(src_w / 2) * M` by `(src_h / 2) * M`.
#[test]
fn test_working_dimension_contract() {
    for (w, h, m) in [(20u32, 20u32, 5u32), (21, 13, 3), (100, 7, 1), (9, 9, 4)] {
        let source = Raster::filled(w, h, Rgb::new(128, 128, 128));
        let design = MosaicDesigner::new(red_white_palette())
            .magnification(m)
            .design(&source)
            .unwrap();

        assert_eq!(design.working().width(), (w / 2) * m, "{w}x{h} M={m}");
        assert_eq!(design.working().height(), (h / 2) * m, "{w}x{h} M={m}");
    }
}

/// If this breaks: edge tiles are being skipped or padded instead of
/// clipped and counted.
#[test]
fn test_clipped_edge_tiles_are_counted() {
    // 13x9 source -> working 6x4 at M=1; tile size 4 -> 2x1 grid with a
    // clipped 2-wide column.
    let source = half_red_white(13, 9);
    let design = MosaicDesigner::new(red_white_palette())
        .magnification(1)
        .base_tile(4)
        .design(&source)
        .unwrap();

    assert_eq!(design.total_beads(), 2);
    let edge = &design.tiles()[1];
    assert_eq!((edge.x, edge.y), (4, 0));
    assert_eq!((edge.width, edge.height), (2, 4));
}

/// If this breaks: the design is no longer a pure function of its inputs.
#[test]
fn test_identical_inputs_identical_outputs() {
    let source = half_red_white(37, 29);
    let designer = MosaicDesigner::new(red_white_palette())
        .magnification(2)
        .base_tile(5);

    let first = designer.design(&source).unwrap();
    let second = designer.design(&source).unwrap();

    assert_eq!(first.color_statistics(), second.color_statistics());
    assert_eq!(first.total_beads(), second.total_beads());
    assert_eq!(first.tiles(), second.tiles());
}

/// If this breaks: the tie-break contract changed. A tile average that is
/// exactly a palette color must match that entry at distance 0, and when
/// several entries share that color the earliest one must win.
#[test]
fn test_distance_zero_tie_goes_to_earliest() {
    let palette = Palette::new(vec![
        PaletteEntry::new("cherry", Rgb::new(255, 0, 0)),
        PaletteEntry::new("tomato", Rgb::new(255, 0, 0)),
        PaletteEntry::new("white", Rgb::new(255, 255, 255)),
    ])
    .unwrap();

    let source = Raster::filled(8, 8, Rgb::new(255, 0, 0));
    let design = MosaicDesigner::new(palette)
        .magnification(1)
        .base_tile(4)
        .design(&source)
        .unwrap();

    assert_eq!(design.total_beads(), 1);
    let tile = &design.tiles()[0];
    assert_eq!(tile.distance, 0.0);
    assert_eq!(tile.color.name, "cherry");
    assert_eq!(design.bill_of_materials().count("tomato"), 0);
}
