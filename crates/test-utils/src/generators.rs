//! Test data generators for synthetic rasters.
//!
//! These generators create predictable, verifiable cell patterns that can be
//! used across the test suite.

use raster_grid::{GeoTransform, RasterGrid};

/// Creates cell values with a predictable pattern.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// # Returns
///
/// A `Vec<f64>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_cells;
///
/// let cells = create_test_cells(10, 5);
/// assert_eq!(cells.len(), 50);
/// assert_eq!(cells[1], 1000.0);  // col=1, row=0
/// assert_eq!(cells[10], 1.0);    // col=0, row=1
/// ```
pub fn create_test_cells(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates monthly-mean-like temperatures in degrees Celsius.
///
/// Warm in the south-east corner (about 30C), cold in the north-west
/// (about -10C).
pub fn create_temperature_cells(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f64 / width.max(1) as f64;
            let y_factor = row as f64 / height.max(1) as f64;
            data.push(-10.0 + x_factor * 20.0 + y_factor * 20.0);
        }
    }
    data
}

/// Single-band grid where every cell holds `value`.
pub fn constant_grid(transform: GeoTransform, width: usize, height: usize, value: f64) -> RasterGrid {
    grid_from_fn(transform, width, height, |_, _| value)
}

/// Single-band grid with `f(ix, iy)` in every cell.
pub fn grid_from_fn<F>(transform: GeoTransform, width: usize, height: usize, f: F) -> RasterGrid
where
    F: Fn(usize, usize) -> f64,
{
    let mut cells = Vec::with_capacity(width * height);
    for iy in 0..height {
        for ix in 0..width {
            cells.push(f(ix, iy));
        }
    }
    RasterGrid::new(transform, width, height, vec![cells]).expect("valid generated grid")
}

/// Single-band grid over the given row-major cells.
pub fn grid_from_cells(transform: GeoTransform, width: usize, height: usize, cells: Vec<f64>) -> RasterGrid {
    RasterGrid::new(transform, width, height, vec![cells]).expect("valid generated grid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_cells() {
        let cells = create_test_cells(10, 5);
        assert_eq!(cells.len(), 50);
        assert_eq!(cells[0], 0.0);
        assert_eq!(cells[1], 1000.0);
        assert_eq!(cells[10], 1.0);
        assert_eq!(cells[11], 1001.0);
    }

    #[test]
    fn test_temperature_cells_range() {
        let cells = create_temperature_cells(50, 50);
        let min = cells.iter().copied().fold(f64::MAX, f64::min);
        let max = cells.iter().copied().fold(f64::MIN, f64::max);
        assert!(min >= -10.0);
        assert!(max <= 30.0);
    }

    #[test]
    fn test_grid_from_fn_indexing() {
        let grid = grid_from_fn(GeoTransform::new(0.0, 0.0, 1.0, -1.0), 4, 3, |ix, iy| {
            (ix * 10 + iy) as f64
        });
        assert_eq!(grid.value(0, 3, 2), Some(32.0));
        assert_eq!(grid.value(0, 1, 0), Some(10.0));
    }
}
