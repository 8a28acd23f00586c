//! Bounding box types and operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
///
/// Serialized as the STAC `[west, south, east, north]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// West Virginia, the region this deployment samples.
    pub const WEST_VIRGINIA: BoundingBox = BoundingBox {
        west: -82.644739,
        south: 37.201483,
        east: -77.719519,
        north: 40.638801,
    };

    /// Create a new bounding box, enforcing `west < east` and `south < north`.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self, BboxError> {
        if !(west.is_finite() && south.is_finite() && east.is_finite() && north.is_finite()) {
            return Err(BboxError::NotFinite);
        }
        if west >= east {
            return Err(BboxError::InvertedLongitude { west, east });
        }
        if south >= north {
            return Err(BboxError::InvertedLatitude { south, north });
        }
        Ok(Self {
            west,
            south,
            east,
            north,
        })
    }

    /// The box as `[west, south, east, north]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// Grow the box by `dx` degrees east/west and `dy` degrees north/south.
    pub fn expand(&self, dx: f64, dy: f64) -> Self {
        Self {
            west: self.west - dx,
            south: self.south - dy,
            east: self.east + dx,
            north: self.north + dy,
        }
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = BboxError;

    fn try_from(v: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

/// Parses `"west,south,east,north"`.
impl FromStr for BoundingBox {
    type Err = BboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BboxError::InvalidFormat(s.to_string()));
        }

        let mut v = [0.0f64; 4];
        for (slot, part) in v.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BboxError::InvalidNumber(part.to_string()))?;
        }
        Self::try_from(v)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BboxError {
    #[error("Invalid bbox format: {0}. Expected 'west,south,east,north'")]
    InvalidFormat(String),

    #[error("Invalid number in bbox: {0}")]
    InvalidNumber(String),

    #[error("Bbox coordinates must be finite")]
    NotFinite,

    #[error("Bbox west ({west}) must be less than east ({east})")]
    InvertedLongitude { west: f64, east: f64 },

    #[error("Bbox south ({south}) must be less than north ({north})")]
    InvertedLatitude { south: f64, north: f64 },
}
