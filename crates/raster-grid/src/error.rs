//! Error types for raster download and decoding.

use climate_common::ClimateError;
use thiserror::Error;

/// Errors that can occur while fetching or decoding a raster.
#[derive(Error, Debug, Clone)]
pub enum RasterError {
    /// The byte source could not be reached.
    #[error("raster download failed: {0}")]
    Transport(String),

    /// The byte source answered with a non-success status.
    #[error("raster download returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The payload is not a TIFF the decoder understands.
    #[error("not a readable GeoTIFF: {0}")]
    InvalidFormat(String),

    /// Declared grid dimensions are unusable.
    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A band does not hold exactly `width * height` cells.
    #[error("band {band} has {actual} cells, expected {expected}")]
    BandSize {
        band: usize,
        expected: usize,
        actual: usize,
    },

    /// Georeferencing tags are absent.
    #[error("missing georeferencing: {0}")]
    MissingGeoreference(String),

    /// Georeferencing is present but unusable (zero/NaN pixel size, rotation).
    #[error("invalid georeferencing: {0}")]
    InvalidGeoreference(String),

    /// Sample type the decoder does not widen to f64.
    #[error("unsupported sample format: {0}")]
    UnsupportedSampleFormat(String),

    /// The blocking decode task panicked or was cancelled.
    #[error("decode task failed: {0}")]
    DecodeTask(String),
}

impl RasterError {
    /// Create an InvalidGeoreference error.
    pub fn invalid_georeference(msg: impl Into<String>) -> Self {
        Self::InvalidGeoreference(msg.into())
    }

    /// Create a MissingGeoreference error.
    pub fn missing_georeference(msg: impl Into<String>) -> Self {
        Self::MissingGeoreference(msg.into())
    }

    /// True for failures talking to the byte source, as opposed to bad bytes.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }
}

impl From<tiff::TiffError> for RasterError {
    fn from(err: tiff::TiffError) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

impl From<reqwest::Error> for RasterError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display includes the full URL; drop it so SAS tokens stay out of logs.
        Self::Transport(err.without_url().to_string())
    }
}

impl From<RasterError> for ClimateError {
    fn from(err: RasterError) -> Self {
        if err.is_transport() {
            ClimateError::UpstreamUnavailable(err.to_string())
        } else {
            ClimateError::DecodeError(err.to_string())
        }
    }
}

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
