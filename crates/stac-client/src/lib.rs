//! Clients for a STAC catalog and its asset signing service.
//!
//! Two collaborators sit behind traits so the sampling pipeline can be
//! tested without a network:
//!
//! - [`CatalogSearch`]: one POST to `/search` for a collection, bbox and instant
//! - [`AssetSigner`]: exchanges an asset href for a short-lived signed URL
//!
//! The HTTP implementations target Microsoft Planetary Computer by default.

pub mod error;
pub mod search;
pub mod sign;
pub mod types;

pub use error::{StacError, StacResult};
pub use search::{CatalogSearch, StacSearchClient, DEFAULT_SEARCH_URL};
pub use sign::{AssetSigner, SasSigner, DEFAULT_SIGN_URL};
pub use types::{SearchRequest, SearchResponse, SignResponse, SignedUrl, StacAsset, StacItem};
