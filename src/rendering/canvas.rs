use ab_glyph::PxScale;
use bead_mosaic::MosaicDesign;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::error::RenderError;
use crate::rendering::font::LabelFont;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Label font height in pixels per unit of magnification.
const LABEL_SCALE_PER_MAGNIFICATION: u32 = 3;

/// Perceived brightness of a color: `(R*299 + G*587 + B*114) / 1000`,
/// integer floor.
pub fn perceived_brightness(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000
}

/// Label ink over a tile color: black on bright tiles (brightness strictly
/// above 128), white otherwise. Brightness exactly 128 takes white ink.
pub fn label_ink(r: u8, g: u8, b: u8) -> Rgb<u8> {
    if perceived_brightness(r, g, b) > 128 {
        BLACK
    } else {
        WHITE
    }
}

/// Paints a finished design onto an output canvas.
///
/// The canvas matches the working image size with a white background. Tiles
/// are painted solid with their matched palette color when color
/// replacement is on; color names are drawn centered in their tiles when
/// labeling is on. Separator lines are drawn last and span the canvas at
/// every tile boundary -- they are cosmetic and never affect tile data.
pub struct CanvasRenderer {
    replace_colors: bool,
    draw_labels: bool,
    magnification: u32,
    font: Option<LabelFont>,
}

impl CanvasRenderer {
    /// Create a renderer. `font` must be present when `draw_labels` is set.
    pub fn new(
        replace_colors: bool,
        draw_labels: bool,
        magnification: u32,
        font: Option<LabelFont>,
    ) -> Self {
        Self {
            replace_colors,
            draw_labels,
            magnification,
            font,
        }
    }

    /// Paint the design onto a fresh canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontUnavailable`] when labels are requested
    /// but no font was supplied.
    pub fn render(&self, design: &MosaicDesign) -> Result<RgbImage, RenderError> {
        let font = match (&self.font, self.draw_labels) {
            (Some(font), true) => Some(font),
            (None, true) => return Err(RenderError::FontUnavailable),
            _ => None,
        };

        let width = design.working().width();
        let height = design.working().height();
        let mut canvas = RgbImage::from_pixel(width, height, WHITE);

        let scale = PxScale::from((LABEL_SCALE_PER_MAGNIFICATION * self.magnification) as f32);

        for tile in design.tiles() {
            let [r, g, b] = tile.color.rgb.to_bytes();

            if self.replace_colors {
                let rect =
                    Rect::at(tile.x as i32, tile.y as i32).of_size(tile.width, tile.height);
                draw_filled_rect_mut(&mut canvas, rect, Rgb([r, g, b]));
            }

            if let Some(font) = font {
                let ink = label_ink(r, g, b);
                let (text_w, text_h) = text_size(scale, font.font(), &tile.color.name);
                let text_x = tile.x as i32 + (tile.width as i32 - text_w as i32) / 2;
                let text_y = tile.y as i32 + (tile.height as i32 - text_h as i32) / 2;
                draw_text_mut(
                    &mut canvas,
                    ink,
                    text_x,
                    text_y,
                    scale,
                    font.font(),
                    &tile.color.name,
                );
            }
        }

        self.draw_separators(&mut canvas, design.tile_size());

        Ok(canvas)
    }

    /// 1-pixel white lines spanning the canvas at every tile boundary.
    fn draw_separators(&self, canvas: &mut RgbImage, tile_size: u32) {
        let (width, height) = canvas.dimensions();

        let mut x = tile_size;
        while x < width {
            for y in 0..height {
                canvas.put_pixel(x, y, WHITE);
            }
            x += tile_size;
        }

        let mut y = tile_size;
        while y < height {
            for x in 0..width {
                canvas.put_pixel(x, y, WHITE);
            }
            y += tile_size;
        }
    }
}
