//! Deterministic resizing ahead of tiling.
//!
//! The mosaic pipeline normalizes its input with two nearest-neighbor
//! passes: a half downscale that suppresses noise before quantization, then
//! an integer upscale by the magnification factor that sets the grid
//! granularity. Nearest-neighbor sampling guarantees the working image
//! contains only colors present in the downsampled source, so tile averages
//! reflect real source colors rather than interpolation artifacts.

mod resize;

pub use resize::{downscale_half, resize_nearest, upscale};
