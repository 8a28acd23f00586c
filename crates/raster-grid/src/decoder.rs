//! Fetching a raster by URL and decoding it.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use climate_common::redact_url;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::{RasterError, Result};
use crate::geotiff::decode_geotiff;
use crate::grid::RasterGrid;

/// Source of decoded rasters.
#[async_trait]
pub trait RasterDecoder: Send + Sync {
    /// Download the raster at `url` in full and decode it.
    async fn decode(&self, url: &str) -> Result<RasterGrid>;
}

/// Downloads GeoTIFFs over HTTP(S) and decodes them on the blocking pool.
#[derive(Clone)]
pub struct HttpRasterDecoder {
    client: Client,
}

impl HttpRasterDecoder {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self { client })
    }

    /// Reuse an existing client (shared connection pool).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RasterDecoder for HttpRasterDecoder {
    #[instrument(skip(self, url), fields(url = %redact_url(url)))]
    async fn decode(&self, url: &str) -> Result<RasterGrid> {
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Raster download rejected");
            return Err(RasterError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let download_ms = start.elapsed().as_millis() as u64;
        debug!(size = bytes.len(), download_ms, "Downloaded raster");

        let grid = tokio::task::spawn_blocking(move || decode_geotiff(&bytes))
            .await
            .map_err(|e| RasterError::DecodeTask(e.to_string()))??;

        debug!(
            width = grid.width(),
            height = grid.height(),
            total_ms = start.elapsed().as_millis() as u64,
            "Raster ready"
        );
        Ok(grid)
    }
}
