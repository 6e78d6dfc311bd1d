//! Grid geometry for fitting a terminal into a pixel area
//!
//! This module converts between the two spaces a fit has to reconcile:
//! - Pixel space (container content box, element padding, scrollbar allowance)
//! - Grid space (whole terminal cells: columns, rows)
//!
//! All conversions floor toward the smaller grid and then clamp to the
//! configured minimum, so the result is always a usable grid even when the
//! pixel area is empty or negative.

use serde::Serialize;

use crate::constants::{MINIMUM_COLS, MINIMUM_ROWS, PROP_HEIGHT, PROP_WIDTH};
use crate::style::{ComputedStyle, Padding};

/// Pixel size of a single character cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl CellMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Metrics reported before the renderer has measured a glyph
    pub fn unmeasured() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Both dimensions are finite and strictly positive.
    ///
    /// Zero is what a renderer reports before its first measurement; NaN and
    /// negative values are treated the same way so no division below can
    /// produce a meaningless grid.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Terminal grid size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }
}

/// Lower bound applied to every computed grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFloor {
    pub cols: usize,
    pub rows: usize,
}

impl Default for GridFloor {
    fn default() -> Self {
        Self {
            cols: MINIMUM_COLS,
            rows: MINIMUM_ROWS,
        }
    }
}

/// Content box of the container, in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBox {
    pub width: i64,
    pub height: i64,
}

impl ContentBox {
    /// Read the container's computed `width` and `height`.
    ///
    /// Width is clamped at zero; height only falls back to zero when it
    /// doesn't parse and may stay negative.
    pub fn from_style(style: &impl ComputedStyle) -> Self {
        Self {
            width: style.px(PROP_WIDTH).map_or(0, |w| w.max(0)),
            height: style.px(PROP_HEIGHT).unwrap_or(0),
        }
    }

    /// Space left for cells once padding and the scrollbar allowance are taken out
    pub fn available(&self, padding: &Padding, scrollbar_width: i64) -> ContentBox {
        ContentBox {
            width: self
                .width
                .saturating_sub(padding.horizontal())
                .saturating_sub(scrollbar_width),
            height: self.height.saturating_sub(padding.vertical()),
        }
    }
}

/// Result of measuring the available area, created fresh for every fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMeasurement {
    pub available_width: i64,
    pub available_height: i64,
    pub cols: usize,
    pub rows: usize,
}

impl LayoutMeasurement {
    #[inline]
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.cols, self.rows)
    }
}

/// Whole cells that fit along one axis, never below `minimum`.
///
/// Negative quotients floor below zero and are lifted to `minimum`; the
/// float-to-integer conversion saturates, so huge areas can't wrap.
#[inline]
pub fn cells_along(available: i64, cell_size: f64, minimum: usize) -> usize {
    let cells = (available as f64 / cell_size).floor();
    if cells <= 0.0 {
        return minimum;
    }
    (cells as usize).max(minimum)
}

/// Measure the grid that fits `available` with cells of `cell` pixels.
///
/// Callers must check `cell.is_measured()` first.
pub fn measure(available: ContentBox, cell: CellMetrics, floor: GridFloor) -> LayoutMeasurement {
    LayoutMeasurement {
        available_width: available.width,
        available_height: available.height,
        cols: cells_along(available.width, cell.width, floor.cols),
        rows: cells_along(available.height, cell.height, floor.rows),
    }
}
