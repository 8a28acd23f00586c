//! Pixel windows covering a geographic bounding box.

use std::ops::RangeInclusive;

use climate_common::BoundingBox;

use crate::grid::RasterGrid;

/// Inclusive pixel index range `[ix_start, ix_end] x [iy_start, iy_end]`.
///
/// Always inside the grid it was computed for. Empty when a start exceeds its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelWindow {
    pub ix_start: usize,
    pub ix_end: usize,
    pub iy_start: usize,
    pub iy_end: usize,
}

impl PixelWindow {
    /// The canonical empty window.
    pub const EMPTY: PixelWindow = PixelWindow {
        ix_start: 1,
        ix_end: 0,
        iy_start: 1,
        iy_end: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.ix_start > self.ix_end || self.iy_start > self.iy_end
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.ix_end - self.ix_start + 1
        }
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.iy_end - self.iy_start + 1
        }
    }

    /// Total number of cells covered.
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.ix_start..=self.ix_end
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.iy_start..=self.iy_end
    }

    pub fn contains(&self, ix: usize, iy: usize) -> bool {
        self.columns().contains(&ix) && self.rows().contains(&iy)
    }
}

/// Compute the pixel window of `grid` that covers `bbox`.
///
/// Per axis the fractional index is `(coord - origin) / step`; the window
/// runs from the floor of the lower edge to the ceiling of the upper edge,
/// clamped to the grid. For a north-up grid (negative `pixel_height`) this is
///
/// ```text
/// ix_start = clamp(floor((west  - origin_x) / pixel_width),   0, width  - 1)
/// ix_end   = clamp(ceil ((east  - origin_x) / pixel_width),   0, width  - 1)
/// iy_start = clamp(floor((origin_y - north) / |pixel_height|), 0, height - 1)
/// iy_end   = clamp(ceil ((origin_y - south) / |pixel_height|), 0, height - 1)
/// ```
///
/// A box entirely outside the grid on either axis gives [`PixelWindow::EMPTY`].
pub fn compute_window(grid: &RasterGrid, bbox: &BoundingBox) -> PixelWindow {
    let t = grid.transform();

    let cols = axis_range(bbox.west, bbox.east, t.origin_x, t.pixel_width, grid.width());
    let rows = axis_range(
        bbox.north,
        bbox.south,
        t.origin_y,
        t.pixel_height,
        grid.height(),
    );

    match (cols, rows) {
        (Some((ix_start, ix_end)), Some((iy_start, iy_end))) => PixelWindow {
            ix_start,
            ix_end,
            iy_start,
            iy_end,
        },
        _ => PixelWindow::EMPTY,
    }
}

/// Clamped inclusive index range along one axis, `None` if `[a, b]` misses the axis entirely.
fn axis_range(a: f64, b: f64, origin: f64, step: f64, len: usize) -> Option<(usize, usize)> {
    let fa = (a - origin) / step;
    let fb = (b - origin) / step;
    let start = fa.min(fb).floor();
    let end = fa.max(fb).ceil();

    let last = (len - 1) as f64;
    if end < 0.0 || start > last {
        return None;
    }

    Some((start.max(0.0) as usize, end.min(last) as usize))
}
