//! Catalog search.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

use crate::error::{excerpt, StacError, StacResult};
use crate::types::{SearchRequest, SearchResponse, StacItem};

/// Planetary Computer STAC search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://planetarycomputer.microsoft.com/api/stac/v1/search";

const SERVICE: &str = "catalog";

/// Spatiotemporal catalog lookup.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// First item matching the request, or `None` when nothing matches.
    async fn search(&self, request: &SearchRequest) -> StacResult<Option<StacItem>>;
}

/// STAC API `POST /search` client.
#[derive(Clone)]
pub struct StacSearchClient {
    client: Client,
    search_url: String,
}

impl StacSearchClient {
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> StacResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| StacError::transport(SERVICE, e))?;

        Ok(Self::with_client(client, search_url))
    }

    pub fn with_client(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

#[async_trait]
impl CatalogSearch for StacSearchClient {
    #[instrument(
        skip(self, request),
        fields(collections = ?request.collections, bbox = %request.bbox, datetime = %request.datetime)
    )]
    async fn search(&self, request: &SearchRequest) -> StacResult<Option<StacItem>> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.search_url)
            .json(request)
            .send()
            .await
            .map_err(|e| StacError::transport(SERVICE, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StacError::transport(SERVICE, e))?;

        if !status.is_success() {
            warn!(status = %status, "Catalog search failed");
            return Err(StacError::HttpStatus {
                service: SERVICE,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Catalog search response has unexpected shape");
            StacError::invalid_response(SERVICE, e.to_string())
        })?;

        let item = parsed.first_item().map_err(|e| {
            error!(error = %e, "First catalog item has unexpected shape");
            StacError::invalid_response(SERVICE, e.to_string())
        })?;

        debug!(
            matched = parsed.features.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Catalog search complete"
        );
        Ok(item)
    }
}
