//! Common test fixtures for the temperature sampler.

/// Common bounding boxes for testing.
pub mod bbox {
    use climate_common::BoundingBox;

    /// The deployment's region.
    pub const WEST_VIRGINIA: BoundingBox = BoundingBox::WEST_VIRGINIA;

    /// West Virginia rounded to two decimals.
    pub const WEST_VIRGINIA_ROUNDED: BoundingBox = BoundingBox {
        west: -82.64,
        south: 37.20,
        east: -77.72,
        north: 40.64,
    };

    /// Somewhere in the Atlantic, far from the reference grid.
    pub const OFFSHORE: BoundingBox = BoundingBox {
        west: -40.0,
        south: 10.0,
        east: -30.0,
        north: 20.0,
    };
}

/// Common grid specifications for testing.
pub mod grid {
    use raster_grid::{GeoTransform, RasterGrid};

    use crate::generators::grid_from_fn;

    /// 0.1 degree cells from (-83, 41), 100x100: covers West Virginia.
    pub const REFERENCE_TRANSFORM: GeoTransform = GeoTransform {
        origin_x: -83.0,
        origin_y: 41.0,
        pixel_width: 0.1,
        pixel_height: -0.1,
    };

    pub const REFERENCE_WIDTH: usize = 100;
    pub const REFERENCE_HEIGHT: usize = 100;

    /// NClimGrid CONUS layout (1/24 degree).
    pub const NCLIMGRID_TRANSFORM: GeoTransform = GeoTransform {
        origin_x: -124.708_333_333_333_3,
        origin_y: 49.383_333_333_333_3,
        pixel_width: 1.0 / 24.0,
        pixel_height: -1.0 / 24.0,
    };

    pub const NCLIMGRID_WIDTH: usize = 1385;
    pub const NCLIMGRID_HEIGHT: usize = 596;

    /// Reference grid where every cell is 20.0 C.
    pub fn reference_grid() -> RasterGrid {
        grid_from_fn(REFERENCE_TRANSFORM, REFERENCE_WIDTH, REFERENCE_HEIGHT, |_, _| 20.0)
    }
}

/// Common STAC payloads.
pub mod stac {
    use indexmap::IndexMap;
    use stac_client::{StacAsset, StacItem};

    pub const COLLECTION: &str = "noaa-nclimgrid-monthly";

    /// Asset keys in the order the catalog declares them for NClimGrid monthly items.
    pub const NCLIMGRID_ASSET_KEYS: [&str; 4] = ["prcp", "tavg", "tmax", "tmin"];

    pub fn asset(href: &str) -> StacAsset {
        StacAsset {
            href: href.to_string(),
            media_type: Some("image/tiff; application=geotiff; profile=cloud-optimized".to_string()),
            title: None,
            roles: vec!["data".to_string()],
        }
    }

    /// Item with the given `(key, href)` assets, in order.
    pub fn item_with_assets(id: &str, assets: &[(&str, &str)]) -> StacItem {
        let assets: IndexMap<String, StacAsset> = assets
            .iter()
            .map(|(key, href)| (key.to_string(), asset(href)))
            .collect();
        StacItem {
            id: Some(id.to_string()),
            collection: Some(COLLECTION.to_string()),
            assets,
        }
    }

    /// NClimGrid monthly item for `yyyymm`, e.g. `"202207"`.
    pub fn nclimgrid_item(yyyymm: &str) -> StacItem {
        let hrefs: Vec<(String, String)> = NCLIMGRID_ASSET_KEYS
            .iter()
            .map(|key| {
                (
                    key.to_string(),
                    format!(
                        "https://nclimgridwesteurope.blob.core.windows.net/nclimgrid/nclimgrid-{key}/nclimgrid_{key}_{yyyymm}.tif"
                    ),
                )
            })
            .collect();
        let pairs: Vec<(&str, &str)> = hrefs.iter().map(|(k, h)| (k.as_str(), h.as_str())).collect();
        item_with_assets(&format!("nclimgrid-{yyyymm}"), &pairs)
    }
}

/// Common request dates.
pub mod dates {
    pub const SCENARIO: &str = "2022-07-15";

    pub const MALFORMED: [&str; 6] = ["2024-13-01", "abc", "2024-1-1", "", "2024-00-01", "2024/07/15"];
}
