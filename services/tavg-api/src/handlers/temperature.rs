//! `GET /temperature/:date`

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// Sample the month containing `date` and return `[{lat, lon, tavg}, ...]`.
#[instrument(skip(state))]
pub async fn temperature_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(date): Path<String>,
) -> Response {
    let start = Instant::now();

    match state.sampler.sample(&date).await {
        Ok(points) => {
            metrics::record_request("ok", start.elapsed());
            metrics::record_points(points.len());
            Json(points).into_response()
        }
        Err(err) => {
            metrics::record_request(err.kind().as_str(), start.elapsed());
            ApiError::from(err).into_response()
        }
    }
}
