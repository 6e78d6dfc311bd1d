//! Fit a terminal's grid to the pixel area of its containing element.
//!
//! A fit reads the container's computed size, the terminal element's padding
//! and the renderer's cell size, then resizes the terminal to the largest
//! whole grid that fits and syncs the paired backing surface to the
//! available pixel area.
//!
//! Anything that isn't ready yet (no terminal, an element that isn't attached,
//! a renderer that hasn't measured a cell) turns the fit into a no-op. Hosts
//! call it again on the next resize event; there is nothing to report.

use log::debug;

use crate::geometry::{self, ContentBox, GridFloor, LayoutMeasurement};
use crate::style::Padding;
use crate::surface::BackingSurface;
use crate::terminal::{LayoutElement, TerminalHandle};

/// Tunables for a fit; the default floor is 2 columns by 1 row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    pub floor: GridFloor,
    /// Take the viewport's scrollbar width out of the available width
    pub reserve_scrollbar: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            floor: GridFloor::default(),
            reserve_scrollbar: true,
        }
    }
}

/// Computes and applies terminal fits.
///
/// Holds no state between calls; invoking it twice with unchanged
/// measurements resizes the terminal at most once.
#[derive(Debug, Clone, Default)]
pub struct FitCalculator {
    options: FitOptions,
}

impl FitCalculator {
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    /// Measure the grid the terminal would get, without touching anything.
    ///
    /// Returns `None` when the terminal is absent, its element is missing or
    /// detached, or its cell size hasn't been measured.
    pub fn propose<T: TerminalHandle>(&self, terminal: Option<&T>) -> Option<LayoutMeasurement> {
        let terminal = terminal?;
        let element = terminal.element()?;
        let container = element.parent()?;

        let cell = terminal.cell_metrics();
        if !cell.is_measured() {
            return None;
        }

        let content = ContentBox::from_style(&container.computed_style());
        let padding = Padding::from_style(&element.computed_style());
        let scrollbar = if self.options.reserve_scrollbar {
            terminal.scrollbar_width()
        } else {
            0
        };

        let available = content.available(&padding, scrollbar);
        Some(geometry::measure(available, cell, self.options.floor))
    }

    /// Resize the terminal to fit its container and sync the backing surface.
    ///
    /// The surface is updated on every fit that gets past the readiness
    /// checks; the terminal is only resized when its grid actually differs.
    pub fn fit<T, S>(&self, terminal: Option<&mut T>, surface: &mut S)
    where
        T: TerminalHandle,
        S: BackingSurface,
    {
        let Some(terminal) = terminal else {
            return;
        };
        let Some(measurement) = self.propose(Some(&*terminal)) else {
            return;
        };

        surface.sync_to(measurement.available_width, measurement.available_height);

        let target = measurement.grid();
        if terminal.grid() != target {
            debug!(
                "Fitting terminal {}x{} -> {}x{} ({}x{}px available)",
                terminal.cols(),
                terminal.rows(),
                target.cols,
                target.rows,
                measurement.available_width,
                measurement.available_height
            );
            terminal.resize(target.cols, target.rows);
        }
    }
}

/// Fit with the default options
pub fn fit<T, S>(terminal: Option<&mut T>, surface: &mut S)
where
    T: TerminalHandle,
    S: BackingSurface,
{
    FitCalculator::default().fit(terminal, surface);
}

/// Propose a grid with the default options
pub fn propose_dimensions<T: TerminalHandle>(terminal: Option<&T>) -> Option<LayoutMeasurement> {
    FitCalculator::default().propose(terminal)
}
