//! Decoding in-memory GeoTIFFs into raster grids.

mod common;

use climate_common::BoundingBox;
use common::{Georef, REFERENCE_GEOREF};
use raster_grid::{compute_window, decode_geotiff, RasterError};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ============================================================================
// Georeferencing
// ============================================================================

#[test]
fn test_decode_scale_and_tiepoint() {
    let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let bytes = common::gray_f32(4, 3, &data, REFERENCE_GEOREF, None);

    let grid = decode_geotiff(&bytes).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.band_count(), 1);
    assert!(approx(grid.origin_x(), -83.0));
    assert!(approx(grid.origin_y(), 41.0));
    assert!(approx(grid.pixel_width(), 0.1));
    assert!(approx(grid.pixel_height(), -0.1));
}

#[test]
fn test_decode_transformation_matrix() {
    let georef = Georef::Matrix {
        origin_x: -125.0,
        origin_y: 49.5,
        dx: 0.25,
        dy: 0.5,
    };
    let bytes = common::gray_f32(2, 2, &[1.0, 2.0, 3.0, 4.0], georef, None);

    let grid = decode_geotiff(&bytes).unwrap();
    assert!(approx(grid.origin_x(), -125.0));
    assert!(approx(grid.origin_y(), 49.5));
    assert!(approx(grid.pixel_width(), 0.25));
    assert!(approx(grid.pixel_height(), -0.5));
}

#[test]
fn test_decode_without_georeference_fails() {
    let bytes = common::gray_f32(2, 2, &[1.0; 4], Georef::None, None);
    let err = decode_geotiff(&bytes).unwrap_err();
    assert!(matches!(err, RasterError::MissingGeoreference(_)));
}

#[test]
fn test_decode_zero_pixel_scale_fails() {
    let georef = Georef::ScaleTiepoint {
        origin_x: 0.0,
        origin_y: 0.0,
        dx: 0.0,
        dy: 0.1,
    };
    let bytes = common::gray_f32(2, 2, &[1.0; 4], georef, None);
    let err = decode_geotiff(&bytes).unwrap_err();
    assert!(matches!(err, RasterError::InvalidGeoreference(_)));
}

// ============================================================================
// Sample formats
// ============================================================================

#[test]
fn test_decode_float_values_row_major() {
    let data: Vec<f32> = (0..12).map(|v| v as f32 * 0.5).collect();
    let bytes = common::gray_f32(4, 3, &data, REFERENCE_GEOREF, None);

    let grid = decode_geotiff(&bytes).unwrap();
    assert_eq!(grid.value(0, 0, 0), Some(0.0));
    assert_eq!(grid.value(0, 3, 0), Some(1.5));
    assert_eq!(grid.value(0, 0, 1), Some(2.0));
    assert_eq!(grid.value(0, 3, 2), Some(5.5));
}

#[test]
fn test_decode_u16_widens_to_f64() {
    let bytes = common::gray_u16(2, 1, &[0, 65535], REFERENCE_GEOREF);
    let grid = decode_geotiff(&bytes).unwrap();
    assert_eq!(grid.value(0, 1, 0), Some(65535.0));
}

#[test]
fn test_decode_rgb_splits_bands() {
    let data = [10u8, 20, 30, 11, 21, 31];
    let bytes = common::rgb_u8(2, 1, &data, REFERENCE_GEOREF);

    let grid = decode_geotiff(&bytes).unwrap();
    assert_eq!(grid.band_count(), 3);
    assert_eq!(grid.value(0, 0, 0), Some(10.0));
    assert_eq!(grid.value(0, 1, 0), Some(11.0));
    assert_eq!(grid.value(1, 0, 0), Some(20.0));
    assert_eq!(grid.value(2, 1, 0), Some(31.0));
}

// ============================================================================
// No-data handling
// ============================================================================

#[test]
fn test_decode_reads_gdal_nodata() {
    let bytes = common::gray_f32(3, 1, &[1.0, -9999.0, 3.0], REFERENCE_GEOREF, Some("-9999"));
    let grid = decode_geotiff(&bytes).unwrap();

    assert_eq!(grid.nodata(), Some(-9999.0));
    assert_eq!(grid.value(0, 1, 0), None);
    assert_eq!(grid.raw(0, 1, 0), Some(-9999.0));
}

#[test]
fn test_decode_nan_cells_are_nodata() {
    let bytes = common::gray_f32(2, 1, &[f32::NAN, 5.0], REFERENCE_GEOREF, Some("nan"));
    let grid = decode_geotiff(&bytes).unwrap();

    assert_eq!(grid.value(0, 0, 0), None);
    assert_eq!(grid.value(0, 1, 0), Some(5.0));
}

#[test]
fn test_decode_unparseable_nodata_is_ignored() {
    let bytes = common::gray_f32(1, 1, &[7.0], REFERENCE_GEOREF, Some("none"));
    let grid = decode_geotiff(&bytes).unwrap();
    assert_eq!(grid.nodata(), None);
    assert_eq!(grid.value(0, 0, 0), Some(7.0));
}

// ============================================================================
// Decode + window
// ============================================================================

#[test]
fn test_decoded_reference_grid_window() {
    let data = vec![20.0f32; 100 * 100];
    let bytes = common::gray_f32(100, 100, &data, REFERENCE_GEOREF, None);
    let grid = decode_geotiff(&bytes).unwrap();

    let window = compute_window(&grid, &BoundingBox::WEST_VIRGINIA);
    assert_eq!(window.ix_start, 3);
    assert_eq!(window.iy_start, 3);
    assert!(window.contains(5, 3));
}

#[test]
fn test_decode_garbage_is_invalid_format() {
    let err = decode_geotiff(&[0x49, 0x49, 0x2a, 0x00, 0xff, 0xff]).unwrap_err();
    assert!(matches!(err, RasterError::InvalidFormat(_)));
}
