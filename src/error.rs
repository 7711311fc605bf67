use std::path::PathBuf;
use thiserror::Error;

/// Palette catalog and option validation failures.
///
/// An unknown template key fails here, before any network or pixel work --
/// the pipeline never starts with an absent or empty palette.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Palette template not found: '{key}' (available: {available})")]
    TemplateNotFound { key: String, available: String },

    #[error("Malformed palette catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read palette catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid palette template '{key}': {source}")]
    Palette {
        key: String,
        source: bead_mosaic::PaletteError,
    },

    #[error("Output path required when rendering is requested")]
    OutputPathRequired,
}

/// Image acquisition failures: transport errors and non-success statuses.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Source bytes that do not decode into a raster image.
#[derive(Debug, Error)]
#[error("Unrecognized or corrupt image data: {0}")]
pub struct DecodeError(#[from] pub image::ImageError);

/// Canvas rendering and persistence failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No usable label font found (pass an explicit font path)")]
    FontUnavailable,

    #[error("Failed to load label font '{path}': {source}")]
    FontLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid font data in '{path}'")]
    FontParse { path: PathBuf },

    #[error("Failed to write canvas '{path}': {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Top-level error for one design run.
///
/// Every stage failure is wrapped here, so the entry point reports a single
/// typed, request-scoped diagnostic and raw internal errors never cross the
/// boundary unwrapped. There is no automatic retry and no partial result.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Mosaic error: {0}")]
    Mosaic(#[from] bead_mosaic::MosaicError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
