//! Call-counting fakes for the pipeline's collaborators.
//!
//! Each fake returns a canned result and records what it was asked. The
//! `forbidden()` constructors panic when invoked, for asserting that a step
//! is never reached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use raster_grid::{RasterDecoder, RasterError, RasterGrid};
use stac_client::{AssetSigner, CatalogSearch, SearchRequest, SignedUrl, StacError, StacItem, StacResult};

/// Canned [`CatalogSearch`].
pub struct FakeCatalog {
    result: Option<StacResult<Vec<StacItem>>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<SearchRequest>>,
}

impl FakeCatalog {
    pub fn with_items(items: Vec<StacItem>) -> Self {
        Self::new(Some(Ok(items)))
    }

    pub fn empty() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn failing(err: StacError) -> Self {
        Self::new(Some(Err(err)))
    }

    pub fn forbidden() -> Self {
        Self::new(None)
    }

    fn new(result: Option<StacResult<Vec<StacItem>>>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSearch for FakeCatalog {
    async fn search(&self, request: &SearchRequest) -> StacResult<Option<StacItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.result
            .clone()
            .unwrap_or_else(|| panic!("catalog search must not be called"))
            .map(|items| items.into_iter().next())
    }
}

/// Canned [`AssetSigner`].
pub struct FakeSigner {
    behavior: SignBehavior,
    calls: AtomicUsize,
    hrefs: Mutex<Vec<String>>,
}

enum SignBehavior {
    AppendToken(String),
    Fixed(StacResult<SignedUrl>),
    Forbidden,
}

impl FakeSigner {
    /// Signs by appending `?<token>` to the href.
    pub fn appending(token: &str) -> Self {
        Self::new(SignBehavior::AppendToken(token.to_string()))
    }

    pub fn failing(err: StacError) -> Self {
        Self::new(SignBehavior::Fixed(Err(err)))
    }

    pub fn forbidden() -> Self {
        Self::new(SignBehavior::Forbidden)
    }

    fn new(behavior: SignBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            hrefs: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn hrefs(&self) -> Vec<String> {
        self.hrefs.lock().unwrap().clone()
    }
}

impl Default for FakeSigner {
    fn default() -> Self {
        Self::appending("sig=fake")
    }
}

#[async_trait]
impl AssetSigner for FakeSigner {
    async fn sign(&self, href: &str) -> StacResult<SignedUrl> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hrefs.lock().unwrap().push(href.to_string());
        match &self.behavior {
            SignBehavior::AppendToken(token) => Ok(SignedUrl::new(format!("{href}?{token}"), None)),
            SignBehavior::Fixed(result) => result.clone(),
            SignBehavior::Forbidden => panic!("signer must not be called"),
        }
    }
}

/// Canned [`RasterDecoder`].
pub struct FakeRasterDecoder {
    result: Option<Result<RasterGrid, RasterError>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl FakeRasterDecoder {
    pub fn with_grid(grid: RasterGrid) -> Self {
        Self::new(Some(Ok(grid)))
    }

    pub fn failing(err: RasterError) -> Self {
        Self::new(Some(Err(err)))
    }

    pub fn forbidden() -> Self {
        Self::new(None)
    }

    fn new(result: Option<Result<RasterGrid, RasterError>>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RasterDecoder for FakeRasterDecoder {
    async fn decode(&self, url: &str) -> raster_grid::Result<RasterGrid> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        self.result
            .clone()
            .unwrap_or_else(|| panic!("raster decoder must not be called"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_common::BoundingBox;

    #[tokio::test]
    async fn test_fake_catalog_records_requests() {
        let catalog = FakeCatalog::empty();
        let req = SearchRequest::new("c", BoundingBox::WEST_VIRGINIA, "2022-07-15T00:00:00Z");
        assert!(catalog.search(&req).await.unwrap().is_none());
        assert_eq!(catalog.calls(), 1);
        assert_eq!(catalog.requests(), vec![req]);
    }

    #[tokio::test]
    async fn test_fake_signer_appends_token() {
        let signer = FakeSigner::default();
        let signed = signer.sign("https://h/x.tif").await.unwrap();
        assert_eq!(signed.as_str(), "https://h/x.tif?sig=fake");
        assert_eq!(signer.hrefs(), vec!["https://h/x.tif".to_string()]);
    }

    #[tokio::test]
    #[should_panic(expected = "must not be called")]
    async fn test_forbidden_decoder_panics() {
        let _ = FakeRasterDecoder::forbidden().decode("https://h/x.tif").await;
    }
}
