//! Asset URL signing.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use climate_common::redact_url;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

use crate::error::{excerpt, StacError, StacResult};
use crate::types::{SignResponse, SignedUrl};

/// Planetary Computer SAS signing endpoint.
pub const DEFAULT_SIGN_URL: &str = "https://planetarycomputer.microsoft.com/api/sas/v1/sign";

const SERVICE: &str = "signer";

/// Exchanges an unsigned asset href for a temporary authorized URL.
#[async_trait]
pub trait AssetSigner: Send + Sync {
    async fn sign(&self, href: &str) -> StacResult<SignedUrl>;
}

/// `GET <sign_url>?href=<href>` signer.
#[derive(Clone)]
pub struct SasSigner {
    client: Client,
    sign_url: String,
}

impl SasSigner {
    pub fn new(sign_url: impl Into<String>, timeout: Duration) -> StacResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| StacError::transport(SERVICE, e))?;

        Ok(Self::with_client(client, sign_url))
    }

    pub fn with_client(client: Client, sign_url: impl Into<String>) -> Self {
        Self {
            client,
            sign_url: sign_url.into(),
        }
    }
}

#[async_trait]
impl AssetSigner for SasSigner {
    #[instrument(skip(self, href), fields(href = %redact_url(href)))]
    async fn sign(&self, href: &str) -> StacResult<SignedUrl> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.sign_url)
            .query(&[("href", href)])
            .send()
            .await
            .map_err(|e| StacError::transport(SERVICE, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StacError::transport(SERVICE, e))?;

        if !status.is_success() {
            warn!(status = %status, "Signing request failed");
            return Err(StacError::HttpStatus {
                service: SERVICE,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let parsed: SignResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Signing response has unexpected shape");
            StacError::invalid_response(SERVICE, e.to_string())
        })?;

        let signed = parsed.into_signed_url().map_err(|e| {
            error!("Signing response has no signed URL");
            e
        })?;

        debug!(
            signed = %signed,
            expiry = signed.expiry().unwrap_or("unknown"),
            duration_ms = start.elapsed().as_millis() as u64,
            "Asset signed"
        );
        Ok(signed)
    }
}
