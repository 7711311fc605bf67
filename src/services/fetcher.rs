use std::time::Duration;

use bead_mosaic::Raster;

use crate::error::{DecodeError, DesignError, FetchError};

/// Fetches source images over HTTP.
///
/// The client carries a hard timeout and a bounded redirect policy; it never
/// retries. Callers that want retries or cancellation wrap the whole design
/// run externally.
pub struct ImageFetcher {
    client: reqwest::blocking::Client,
}

impl ImageFetcher {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Build a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET a URL and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] on transport failure and
    /// [`FetchError::Status`] on any non-success status.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    /// GET a URL and decode the body into an RGB8 raster.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::FetchError`] for transport/status failures
    /// and [`DecodeError`] for unreadable image bytes, wrapped in
    /// [`DesignError`].
    pub fn fetch(&self, url: &str) -> Result<Raster, DesignError> {
        let bytes = self.fetch_bytes(url)?;
        tracing::debug!(url, bytes = bytes.len(), "Fetched source image");
        Ok(decode_rgb8(&bytes)?)
    }
}

/// Decode image bytes into an RGB8 raster.
///
/// Any format the `image` crate recognizes is accepted; everything is
/// converted to RGB8.
///
/// # Errors
///
/// Returns [`DecodeError`] for unrecognized or corrupt data.
pub fn decode_rgb8(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Raster::from_rgb8(width, height, rgb.as_raw()))
}
