//! STAC search and signing schemas.
//!
//! Only the fields the sampler reads are modelled; everything else in the
//! catalog's responses is ignored.

use std::fmt;

use climate_common::{redact_url, BoundingBox};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{StacError, StacResult};

/// Body of a `POST /search` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub collections: Vec<String>,
    /// Serialized as `[west, south, east, north]`.
    pub bbox: BoundingBox,
    /// A single RFC 3339 instant, e.g. `2022-07-15T00:00:00Z`.
    pub datetime: String,
}

impl SearchRequest {
    pub fn new(collection: impl Into<String>, bbox: BoundingBox, datetime: impl Into<String>) -> Self {
        Self {
            collections: vec![collection.into()],
            bbox,
            datetime: datetime.into(),
        }
    }
}

/// A STAC `FeatureCollection`, first page only.
///
/// Features stay as raw JSON; only the one the sampler uses is decoded, so a
/// malformed trailing feature does not fail the search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Absent and `null` both read as no features.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<Value>,
}

impl SearchResponse {
    /// Decode the first feature, if any.
    pub fn first_item(&self) -> Result<Option<StacItem>, serde_json::Error> {
        self.features.first().map(StacItem::deserialize).transpose()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One STAC item (GeoJSON feature).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StacItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub collection: Option<String>,
    /// Assets in the order the catalog declared them.
    #[serde(default)]
    pub assets: IndexMap<String, StacAsset>,
}

impl StacItem {
    /// Asset at a zero-based position in declaration order.
    pub fn asset_at(&self, position: usize) -> Option<(&str, &StacAsset)> {
        self.assets
            .get_index(position)
            .map(|(key, asset)| (key.as_str(), asset))
    }

    pub fn asset(&self, key: &str) -> Option<&StacAsset> {
        self.assets.get(key)
    }

    /// Asset keys in declaration order.
    pub fn asset_keys(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }
}

/// A STAC asset; `href` is the unsigned location of the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StacAsset {
    pub href: String,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Response of the SAS signing endpoint.
///
/// The signed URL arrives as `href`; some deployments use `url` instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignResponse {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "msft:expiry")]
    pub expiry: Option<String>,
}

impl SignResponse {
    /// Pick the signed URL, preferring `href`. Empty strings count as absent.
    pub fn into_signed_url(self) -> StacResult<SignedUrl> {
        let url = self
            .href
            .filter(|s| !s.is_empty())
            .or(self.url.filter(|s| !s.is_empty()))
            .ok_or(StacError::MissingSignedUrl)?;

        Ok(SignedUrl {
            url,
            expiry: self.expiry,
        })
    }
}

/// A time-limited, authorized asset URL.
///
/// `Debug` and `Display` print the URL without its query string.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    expiry: Option<String>,
}

impl SignedUrl {
    pub fn new(url: impl Into<String>, expiry: Option<String>) -> Self {
        Self {
            url: url.into(),
            expiry,
        }
    }

    /// The full URL including the access token.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn expiry(&self) -> Option<&str> {
        self.expiry.as_deref()
    }
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(redact_url(&self.url))
    }
}

impl fmt::Debug for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedUrl")
            .field("url", &redact_url(&self.url))
            .field("expiry", &self.expiry)
            .finish()
    }
}
