pub mod design_pipeline;
pub mod fetcher;

pub use design_pipeline::{DesignOptions, DesignPipeline};
pub use fetcher::{decode_rgb8, ImageFetcher};
