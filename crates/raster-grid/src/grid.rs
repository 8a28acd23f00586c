//! Core raster grid type.

use crate::error::{RasterError, Result};

/// Affine georeferencing for a north-up grid without rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// Longitude of the grid's reference corner.
    pub origin_x: f64,
    /// Latitude of the grid's reference corner.
    pub origin_y: f64,
    /// Degrees of longitude per column (signed).
    pub pixel_width: f64,
    /// Degrees of latitude per row (signed, negative when rows run north to south).
    pub pixel_height: f64,
}

impl GeoTransform {
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        }
    }

    fn validate(&self) -> Result<()> {
        let all_finite = [
            self.origin_x,
            self.origin_y,
            self.pixel_width,
            self.pixel_height,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(RasterError::invalid_georeference(format!(
                "non-finite transform {:?}",
                self
            )));
        }
        if self.pixel_width == 0.0 || self.pixel_height == 0.0 {
            return Err(RasterError::invalid_georeference(format!(
                "zero pixel size ({}, {})",
                self.pixel_width, self.pixel_height
            )));
        }
        Ok(())
    }
}

/// A decoded raster: one or more bands of row-major cells plus georeferencing.
///
/// Invariants: `width > 0`, `height > 0`, at least one band, and every band
/// holds exactly `width * height` cells.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    transform: GeoTransform,
    width: usize,
    height: usize,
    bands: Vec<Vec<f64>>,
    nodata: Option<f64>,
}

impl RasterGrid {
    /// Build a grid, validating its shape and georeferencing.
    pub fn new(
        transform: GeoTransform,
        width: usize,
        height: usize,
        bands: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        transform.validate()?;

        if bands.is_empty() {
            return Err(RasterError::BandSize {
                band: 0,
                expected: width * height,
                actual: 0,
            });
        }
        let expected = width * height;
        for (band, cells) in bands.iter().enumerate() {
            if cells.len() != expected {
                return Err(RasterError::BandSize {
                    band,
                    expected,
                    actual: cells.len(),
                });
            }
        }

        Ok(Self {
            transform,
            width,
            height,
            bands,
            nodata: None,
        })
    }

    /// Set the no-data sentinel. NaN cells are always treated as no-data.
    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    pub fn origin_x(&self) -> f64 {
        self.transform.origin_x
    }

    pub fn origin_y(&self) -> f64 {
        self.transform.origin_y
    }

    pub fn pixel_width(&self) -> f64 {
        self.transform.pixel_width
    }

    pub fn pixel_height(&self) -> f64 {
        self.transform.pixel_height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Raw cell value, including no-data sentinels. `None` when out of range.
    pub fn raw(&self, band: usize, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.width || iy >= self.height {
            return None;
        }
        self.bands
            .get(band)
            .and_then(|cells| cells.get(iy * self.width + ix))
            .copied()
    }

    /// Cell value, or `None` when out of range or no-data.
    pub fn value(&self, band: usize, ix: usize, iy: usize) -> Option<f64> {
        self.raw(band, ix, iy).filter(|v| !self.is_nodata(*v))
    }

    /// NaN, or equal to the declared sentinel.
    pub fn is_nodata(&self, v: f64) -> bool {
        v.is_nan() || self.nodata.is_some_and(|nd| v == nd)
    }

    /// Geographic coordinates `(lon, lat)` of a cell's reference corner.
    pub fn cell_coords(&self, ix: usize, iy: usize) -> (f64, f64) {
        let lon = self.transform.origin_x + ix as f64 * self.transform.pixel_width;
        let lat = self.transform.origin_y + iy as f64 * self.transform.pixel_height;
        (lon, lat)
    }
}
