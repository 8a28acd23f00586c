//! Error types for catalog and signing calls.

use climate_common::ClimateError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StacError {
    /// Connection, TLS or timeout failure.
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// Non-success HTTP status.
    #[error("{service} returned HTTP {status}: {body}")]
    HttpStatus {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Successful status, but the body is not the expected JSON shape.
    #[error("{service} returned an unexpected response: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },

    /// The signing response carries no usable URL.
    #[error("signing response has no signed URL")]
    MissingSignedUrl,
}

impl StacError {
    pub fn transport(service: &'static str, err: reqwest::Error) -> Self {
        // without_url keeps signed query strings out of error text
        Self::Transport {
            service,
            message: err.without_url().to_string(),
        }
    }

    pub fn invalid_response(service: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            service,
            message: message.into(),
        }
    }

    /// True when the upstream answered but broke its response contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. } | Self::MissingSignedUrl)
    }
}

impl From<StacError> for ClimateError {
    fn from(err: StacError) -> Self {
        if err.is_contract_violation() {
            ClimateError::ContractViolation(err.to_string())
        } else {
            ClimateError::UpstreamUnavailable(err.to_string())
        }
    }
}

pub type StacResult<T> = Result<T, StacError>;

/// Longest body excerpt carried on an HTTP status error.
pub(crate) const BODY_EXCERPT_LEN: usize = 200;

pub(crate) fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
