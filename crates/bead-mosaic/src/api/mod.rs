//! Public API for the bead-mosaic crate.
//!
//! This module provides the high-level API: [`MosaicDesigner`] builder and
//! [`MosaicError`] error type.

mod builder;
mod error;

pub use builder::MosaicDesigner;
pub use error::MosaicError;
