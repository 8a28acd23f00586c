//! In-memory raster grids with georeferencing.
//!
//! This crate turns a downloaded GeoTIFF into a [`RasterGrid`] and works out
//! which pixels cover a geographic bounding box.
//!
//! # Architecture
//!
//! ```text
//! signed URL
//!      │
//!      ▼
//! RasterDecoder::decode(url)
//!      │
//!      ├─► HTTP GET (full payload)
//!      │
//!      └─► decode_geotiff(bytes)  (blocking pool)
//!               │
//!               ▼
//!          RasterGrid ──► compute_window(grid, bbox) ──► PixelWindow
//! ```
//!
//! # Example
//!
//! ```ignore
//! use raster_grid::{compute_window, HttpRasterDecoder, RasterDecoder};
//!
//! let decoder = HttpRasterDecoder::new(Duration::from_secs(60))?;
//! let grid = decoder.decode(signed.as_str()).await?;
//! let window = compute_window(&grid, &BoundingBox::WEST_VIRGINIA);
//! for ix in window.columns() {
//!     for iy in window.rows() {
//!         // ...
//!     }
//! }
//! ```

pub mod decoder;
pub mod error;
pub mod geotiff;
pub mod grid;
pub mod window;

// Re-export commonly used types at crate root
pub use decoder::{HttpRasterDecoder, RasterDecoder};
pub use error::{RasterError, Result};
pub use geotiff::decode_geotiff;
pub use grid::{GeoTransform, RasterGrid};
pub use window::{compute_window, PixelWindow};
