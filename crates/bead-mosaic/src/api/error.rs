//! Error type for mosaic construction.

use std::fmt;

/// Error type for mosaic construction.
///
/// Returned by [`MosaicDesigner::design`](crate::MosaicDesigner::design)
/// when the source raster or the designer parameters cannot produce a
/// valid working image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicError {
    /// Source raster too small to survive the half downscale
    SourceTooSmall {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },
    /// Magnification factor must be at least 1
    InvalidMagnification(u32),
    /// Base tile edge length must be at least 1
    InvalidBaseTile(u32),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::SourceTooSmall { width, height } => {
                write!(
                    f,
                    "source image {}x{} is too small (minimum 2x2)",
                    width, height
                )
            }
            MosaicError::InvalidMagnification(value) => {
                write!(f, "magnification must be at least 1, got {}", value)
            }
            MosaicError::InvalidBaseTile(value) => {
                write!(f, "base tile size must be at least 1, got {}", value)
            }
        }
    }
}

impl std::error::Error for MosaicError {}
