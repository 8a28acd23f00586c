//! Router construction.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Local development frontend, always allowed.
pub const DEV_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Build the full application router.
pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/temperature/:date", get(handlers::temperature_handler))
        // Health and metrics
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .fallback(handlers::not_found_handler)
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}

/// CORS for the configured frontend plus the local dev origin, with credentials.
///
/// Origins that are not valid header values are skipped.
pub fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = frontend_url
        .into_iter()
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .chain(std::iter::once(DEV_FRONTEND_ORIGIN))
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
