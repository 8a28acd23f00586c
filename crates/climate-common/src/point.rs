//! Output sample type.

use serde::{Deserialize, Serialize};

/// One sampled grid cell, already converted to the display unit.
///
/// Serialized as `{"lat": .., "lon": .., "tavg": ..}` for map clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "tavg")]
    pub value: f64,
}

impl SamplePoint {
    pub fn new(lat: f64, lon: f64, value: f64) -> Self {
        Self { lat, lon, value }
    }
}
