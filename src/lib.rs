//! Beadify - bead mosaic design generator
//!
//! Turns a source image into a bead mosaic: a grid of tiles snapped to a
//! named reference palette, a rendered canvas, and a per-color bill of
//! materials. The algorithmic core lives in the `bead-mosaic` crate; this
//! crate owns acquisition, configuration, rendering and orchestration.
//! The library is exposed for integration testing and embedding.

pub mod collaborators;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
