//! Sampler configuration.

use climate_common::BoundingBox;
use serde::{Deserialize, Serialize};
use stac_client::{DEFAULT_SEARCH_URL, DEFAULT_SIGN_URL};
use thiserror::Error;

/// NOAA NClimGrid monthly collection on Planetary Computer.
pub const DEFAULT_COLLECTION: &str = "noaa-nclimgrid-monthly";

/// Output cap per request.
pub const DEFAULT_MAX_POINTS: usize = 10_000;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Which asset of a catalog item holds the temperature raster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSelector {
    /// Zero-based position in the item's declared asset order.
    Position(usize),
    /// Explicit asset key, e.g. `tavg`.
    Key(String),
}

impl Default for AssetSelector {
    /// Position 1: `tavg` in NClimGrid's `prcp, tavg, tmax, tmin` declaration order.
    fn default() -> Self {
        AssetSelector::Position(1)
    }
}

/// Immutable settings for a [`TemperatureSampler`](crate::TemperatureSampler).
///
/// Every field defaults to the production deployment, so an empty YAML
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// STAC API search endpoint.
    pub search_url: String,
    /// SAS signing endpoint.
    pub sign_url: String,
    pub collection: String,
    /// Region to sample, `[west, south, east, north]`.
    pub bbox: BoundingBox,
    pub max_points: usize,
    pub asset: AssetSelector,
    /// Overall timeout for each upstream HTTP request.
    pub request_timeout_secs: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            sign_url: DEFAULT_SIGN_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            bbox: BoundingBox::WEST_VIRGINIA,
            max_points: DEFAULT_MAX_POINTS,
            asset: AssetSelector::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [("search_url", &self.search_url), ("sign_url", &self.sign_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: url.clone(),
                });
            }
        }
        if self.collection.trim().is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        if self.max_points == 0 {
            return Err(ConfigError::ZeroMaxPoints);
        }
        if let AssetSelector::Key(key) = &self.asset {
            if key.is_empty() {
                return Err(ConfigError::EmptyAssetKey);
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be an http(s) URL, got {value:?}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("collection must not be empty")]
    EmptyCollection,

    #[error("max_points must be at least 1")]
    ZeroMaxPoints,

    #[error("asset key must not be empty")]
    EmptyAssetKey,

    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
