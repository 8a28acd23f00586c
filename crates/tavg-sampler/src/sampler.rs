//! The sampling pipeline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use climate_common::{
    celsius_to_fahrenheit, BoundingBox, ClimateError, ClimateResult, ErrorKind, RequestDate,
    SamplePoint,
};
use raster_grid::{compute_window, HttpRasterDecoder, RasterDecoder, RasterGrid};
use stac_client::{AssetSigner, CatalogSearch, SasSigner, SearchRequest, StacSearchClient};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{ConfigError, SamplerConfig};
use crate::select::select_asset;

/// Band holding the monthly mean.
const TEMPERATURE_BAND: usize = 0;

/// Samples one month of gridded average temperature over a fixed region.
///
/// Each call to [`sample`](Self::sample) runs search, sign, download and
/// decode in sequence. Nothing is cached between calls.
pub struct TemperatureSampler {
    config: SamplerConfig,
    catalog: Arc<dyn CatalogSearch>,
    signer: Arc<dyn AssetSigner>,
    decoder: Arc<dyn RasterDecoder>,
}

impl TemperatureSampler {
    pub fn new(
        config: SamplerConfig,
        catalog: Arc<dyn CatalogSearch>,
        signer: Arc<dyn AssetSigner>,
        decoder: Arc<dyn RasterDecoder>,
    ) -> Self {
        Self {
            config,
            catalog,
            signer,
            decoder,
        }
    }

    /// Build a sampler talking HTTP to the configured endpoints.
    pub fn from_config(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let catalog = StacSearchClient::new(config.search_url.clone(), timeout)
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        let signer = SasSigner::new(config.sign_url.clone(), timeout)
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        let decoder =
            HttpRasterDecoder::new(timeout).map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self::new(
            config,
            Arc::new(catalog),
            Arc::new(signer),
            Arc::new(decoder),
        ))
    }

    /// Sample the month containing `date` (`YYYY-MM-DD`).
    ///
    /// Returns at most `max_points` points, ordered column by column from
    /// the west edge, each column north to south. An empty list is a valid
    /// result when the region misses the raster or every cell is no-data.
    #[instrument(skip(self), fields(collection = %self.config.collection))]
    pub async fn sample(&self, date: &str) -> ClimateResult<Vec<SamplePoint>> {
        let start = Instant::now();
        let result = self.run(date).await;

        match &result {
            Ok(points) => info!(
                points = points.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Sampling complete"
            ),
            Err(err) => log_failure(err),
        }
        result
    }

    async fn run(&self, date: &str) -> ClimateResult<Vec<SamplePoint>> {
        let date = RequestDate::parse(date)?;

        let request = SearchRequest::new(
            self.config.collection.clone(),
            self.config.bbox,
            date.stac_datetime(),
        );
        let item = self.catalog.search(&request).await?.ok_or_else(|| {
            ClimateError::NotFound(format!("no {} item for {}", self.config.collection, date))
        })?;

        let (asset_key, asset) = select_asset(&item, &self.config.asset)?;
        debug!(
            item = item.id.as_deref().unwrap_or("<unnamed>"),
            asset = asset_key,
            "Selected asset"
        );

        let signed = self.signer.sign(&asset.href).await?;
        let grid = self.decoder.decode(signed.as_str()).await?;

        Ok(extract_points(
            &grid,
            &self.config.bbox,
            self.config.max_points,
        ))
    }
}

/// Walk the window over `bbox` column-outer, row-inner, converting each
/// valid cell and stopping as soon as `max_points` are collected.
fn extract_points(grid: &RasterGrid, bbox: &BoundingBox, max_points: usize) -> Vec<SamplePoint> {
    let window = compute_window(grid, bbox);
    if window.is_empty() {
        info!(bbox = %bbox, "Region does not overlap the raster");
        return Vec::new();
    }
    debug!(
        ix_start = window.ix_start,
        ix_end = window.ix_end,
        iy_start = window.iy_start,
        iy_end = window.iy_end,
        cells = window.len(),
        "Computed pixel window"
    );

    let mut points = Vec::with_capacity(window.len().min(max_points));
    let mut skipped = 0usize;

    'columns: for ix in window.columns() {
        for iy in window.rows() {
            if points.len() >= max_points {
                break 'columns;
            }
            let Some(celsius) = grid.value(TEMPERATURE_BAND, ix, iy) else {
                skipped += 1;
                continue;
            };
            let (lon, lat) = grid.cell_coords(ix, iy);
            points.push(SamplePoint::new(lat, lon, celsius_to_fahrenheit(celsius)));
        }
    }

    if points.len() >= max_points {
        debug!(max_points, "Point cap reached");
    }
    debug!(points = points.len(), skipped, "Extracted points");
    points
}

fn log_failure(err: &ClimateError) {
    let kind = err.kind().as_str();
    match err.kind() {
        ErrorKind::ContractViolation => error!(kind, error = %err, "Upstream contract violation"),
        ErrorKind::UpstreamUnavailable | ErrorKind::DecodeError => {
            warn!(kind, error = %err, "Sampling failed")
        }
        ErrorKind::NotFound | ErrorKind::InvalidInput => info!(kind, error = %err, "Sampling rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::grid::REFERENCE_TRANSFORM;
    use test_utils::{constant_grid, grid_from_fn};

    #[test]
    fn test_extract_column_outer_row_inner() {
        let grid = grid_from_fn(REFERENCE_TRANSFORM, 4, 4, |ix, iy| (ix * 10 + iy) as f64);
        let bbox = BoundingBox::new(-82.95, 40.65, -82.75, 40.95).unwrap();

        let points = extract_points(&grid, &bbox, usize::MAX);
        let raw: Vec<f64> = points.iter().map(|p| (p.value - 32.0) * 5.0 / 9.0).collect();

        // ix 0..=3 outer, iy 0..=3 inner
        assert_eq!(points.len(), 16);
        assert!((raw[0] - 0.0).abs() < 1e-9);
        assert!((raw[1] - 1.0).abs() < 1e-9);
        assert!((raw[4] - 10.0).abs() < 1e-9);
        assert!((raw[15] - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_cap_stops_both_loops() {
        let grid = constant_grid(REFERENCE_TRANSFORM, 100, 100, 0.0);
        let points = extract_points(&grid, &BoundingBox::WEST_VIRGINIA, 7);
        assert_eq!(points.len(), 7);
    }

    #[test]
    fn test_extract_skips_nodata_without_counting() {
        let grid = grid_from_fn(REFERENCE_TRANSFORM, 2, 2, |ix, _| {
            if ix == 0 {
                f64::NAN
            } else {
                5.0
            }
        });
        let bbox = BoundingBox::new(-83.0, 40.8, -82.9, 41.0).unwrap();
        let points = extract_points(&grid, &bbox, 10);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| (p.value - 41.0).abs() < 1e-9));
    }
}
