//! Error taxonomy for the temperature sampling pipeline.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for a sampling request.
///
/// Every variant aborts the whole pipeline; there is no partial output.
#[derive(Debug, Error)]
pub enum ClimateError {
    /// Malformed request input (bad date string).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog has no item for the requested month and region.
    #[error("No data: {0}")]
    NotFound(String),

    /// Transport failure or non-success status from an upstream service.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// An upstream service answered successfully with an unusable shape.
    #[error("Upstream contract violation: {0}")]
    ContractViolation(String),

    /// The downloaded bytes are not a usable raster.
    #[error("Raster decode failed: {0}")]
    DecodeError(String),
}

/// Coarse classification of a [`ClimateError`], used for logs and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    UpstreamUnavailable,
    ContractViolation,
    DecodeError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::ContractViolation => "contract_violation",
            ErrorKind::DecodeError => "decode_error",
        }
    }
}

impl ClimateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClimateError::InvalidInput(_) => ErrorKind::InvalidInput,
            ClimateError::NotFound(_) => ErrorKind::NotFound,
            ClimateError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            ClimateError::ContractViolation(_) => ErrorKind::ContractViolation,
            ClimateError::DecodeError(_) => ErrorKind::DecodeError,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::InvalidInput(_) => 400,
            ClimateError::NotFound(_) => 404,
            ClimateError::UpstreamUnavailable(_) => 502,
            ClimateError::ContractViolation(_) | ClimateError::DecodeError(_) => 500,
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Upstream and decode details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ClimateError::InvalidInput(msg) => msg.clone(),
            ClimateError::NotFound(_) => "No data".to_string(),
            ClimateError::UpstreamUnavailable(_) => "Upstream service unavailable".to_string(),
            ClimateError::ContractViolation(_) => {
                "Upstream service returned an unexpected response".to_string()
            }
            ClimateError::DecodeError(_) => "Failed to decode raster data".to_string(),
        }
    }
}

impl From<crate::time::DateParseError> for ClimateError {
    fn from(err: crate::time::DateParseError) -> Self {
        ClimateError::InvalidInput(err.to_string())
    }
}
