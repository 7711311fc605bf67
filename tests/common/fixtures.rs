//! Test fixtures: catalog documents and in-memory encoded images.

use std::io::Cursor;

use bead_mosaic::{Palette, PaletteEntry, Rgb};
use beadify::models::PaletteCatalog;
use image::{ImageFormat, RgbImage};

/// A two-template catalog with the scenario palette under "classic".
pub const CATALOG_JSON: &str = r##"
{
  "classic": {
    "red":   { "rgb": [255, 0, 0],     "hex": "#FF0000" },
    "white": { "rgb": [255, 255, 255], "hex": "#FFFFFF" }
  },
  "mono": {
    "black": { "rgb": [0, 0, 0],       "hex": "#000000" },
    "white": { "rgb": [255, 255, 255], "hex": "#FFFFFF" }
  }
}
"##;

pub fn catalog() -> PaletteCatalog {
    PaletteCatalog::from_json(CATALOG_JSON).expect("fixture catalog must parse")
}

pub fn red_white_palette() -> Palette {
    Palette::new(vec![
        PaletteEntry::new("red", Rgb::new(255, 0, 0)),
        PaletteEntry::new("white", Rgb::new(255, 255, 255)),
    ])
    .expect("fixture palette must build")
}

/// Encode an image as in-memory PNG bytes.
pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding of a fixture image must succeed");
    bytes
}

/// Solid-color PNG bytes.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode_png(&RgbImage::from_pixel(width, height, image::Rgb(rgb)))
}

/// PNG bytes with the left half pure red and the right half pure white.
pub fn half_red_white_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    });
    encode_png(&image)
}
