//! Nearest-neighbor resize passes.

use crate::raster::Raster;

/// Resize to arbitrary dimensions by nearest-neighbor sampling.
///
/// The source coordinate for destination `(x, y)` is
/// `(x * src_w / dst_w, y * src_h / dst_h)` with integer floor division.
/// No blending occurs: every output pixel is a pixel of the source.
///
/// # Panics (debug only)
///
/// Debug-asserts non-zero target dimensions.
pub fn resize_nearest(src: &Raster, new_width: u32, new_height: u32) -> Raster {
    debug_assert!(
        new_width > 0 && new_height > 0,
        "resize target must be non-zero"
    );

    let src_w = src.width() as u64;
    let src_h = src.height() as u64;
    let mut pixels = Vec::with_capacity((new_width as usize) * (new_height as usize));

    for y in 0..new_height {
        let sy = ((y as u64) * src_h / (new_height as u64)) as u32;
        for x in 0..new_width {
            let sx = ((x as u64) * src_w / (new_width as u64)) as u32;
            pixels.push(src.pixel(sx, sy));
        }
    }

    Raster::new(new_width, new_height, pixels)
}

/// First pass: downscale to `(width / 2, height / 2)`, floor division.
pub fn downscale_half(src: &Raster) -> Raster {
    resize_nearest(src, src.width() / 2, src.height() / 2)
}

/// Second pass: upscale both dimensions by the magnification factor,
/// producing the working image.
pub fn upscale(src: &Raster, magnification: u32) -> Raster {
    resize_nearest(
        src,
        src.width() * magnification,
        src.height() * magnification,
    )
}
