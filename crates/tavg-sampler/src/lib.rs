//! Monthly average temperature sampling.
//!
//! [`TemperatureSampler`] turns a request date into a list of
//! Fahrenheit sample points over a fixed region:
//!
//! ```text
//! date ─► CatalogSearch ─► select asset ─► AssetSigner ─► RasterDecoder
//!                                                            │
//!          Vec<SamplePoint> ◄── C→F ◄── band 0 cells ◄── compute_window
//! ```
//!
//! Collaborators are trait objects so tests can swap in fakes.

pub mod config;
pub mod sampler;
pub mod select;

pub use config::{AssetSelector, ConfigError, SamplerConfig};
pub use sampler::TemperatureSampler;
pub use select::select_asset;
