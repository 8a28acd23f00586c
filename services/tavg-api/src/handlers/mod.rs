//! HTTP request handlers for the temperature API.

pub mod health;
pub mod temperature;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::ApiError;

pub use health::{health_handler, metrics_handler};
pub use temperature::temperature_handler;

/// Fallback for unmapped routes.
pub async fn not_found_handler(method: Method, uri: Uri) -> Response {
    debug!(method = %method, path = %uri.path(), "No route");
    ApiError::not_found_route(method.as_str(), uri.path()).into_response()
}
