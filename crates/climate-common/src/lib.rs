//! Common types and utilities shared across the temperature sampler crates.

pub mod bbox;
pub mod error;
pub mod point;
pub mod time;
pub mod units;
pub mod url;

pub use bbox::{BboxError, BoundingBox};
pub use error::{ClimateError, ClimateResult, ErrorKind};
pub use point::SamplePoint;
pub use time::{DateParseError, RequestDate};
pub use units::celsius_to_fahrenheit;
pub use url::redact_url;
