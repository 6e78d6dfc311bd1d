//! Collaborator contracts for the fit calculation, plus a grid model backed by
//! Alacritty for hosts that don't bring their own terminal.

use crate::geometry::{CellMetrics, GridSize};
use crate::style::ComputedStyle;

/// Renderer-side measurements a terminal must expose to be fitted.
///
/// Terminal widgets usually keep these in private render/viewport state;
/// integration layers adapt them here so the calculation never reaches into
/// widget internals directly.
pub trait CellMetricsProvider {
    /// Pixel size of one character cell; zero while the renderer hasn't measured yet
    fn cell_metrics(&self) -> CellMetrics;

    /// Horizontal pixels reserved for the viewport's scrollbar
    fn scrollbar_width(&self) -> i64;
}

/// An element in the host's layout tree
pub trait LayoutElement: Sized {
    type Style: ComputedStyle;

    /// Containing element, `None` when detached
    fn parent(&self) -> Option<Self>;

    fn computed_style(&self) -> Self::Style;
}

/// A live terminal widget that can be resized to a new grid
pub trait TerminalHandle: CellMetricsProvider {
    type Element: LayoutElement;

    /// Root display element, `None` before the widget is opened
    fn element(&self) -> Option<Self::Element>;

    fn cols(&self) -> usize;

    fn rows(&self) -> usize;

    fn resize(&mut self, cols: usize, rows: usize);

    fn grid(&self) -> GridSize {
        GridSize::new(self.cols(), self.rows())
    }
}

#[cfg(feature = "headless")]
pub use grid::{TermEventListener, Terminal};

#[cfg(feature = "headless")]
mod grid {
    use alacritty_terminal::{
        event::{Event, EventListener},
        grid::Dimensions,
        term::{test::TermSize, Config as TermConfig, Term},
    };
    use log::{debug, info};
    use parking_lot::Mutex;
    use std::sync::Arc;

    use crate::constants::MAXIMUM_GRID_DIMENSION;

    /// Alacritty can't build an empty grid, and a saturated fit would
    /// allocate rows of billions of cells
    fn grid_dimension(value: usize) -> usize {
        value.clamp(1, MAXIMUM_GRID_DIMENSION)
    }

    /// Wrapper around Alacritty's terminal grid
    pub struct Terminal {
        term: Arc<Mutex<Term<TermEventListener>>>,
    }

    impl Terminal {
        /// Create a new terminal with the specified dimensions
        pub fn new(cols: usize, rows: usize) -> Self {
            info!("Creating new terminal: {}x{}", cols, rows);

            let size = TermSize::new(grid_dimension(cols), grid_dimension(rows));
            let term = Term::new(TermConfig::default(), &size, TermEventListener::new());

            Self {
                term: Arc::new(Mutex::new(term)),
            }
        }

        /// Resize the terminal
        pub fn resize(&mut self, cols: usize, rows: usize) {
            debug!("Resizing terminal to {}x{}", cols, rows);
            let size = TermSize::new(grid_dimension(cols), grid_dimension(rows));
            self.term.lock().resize(size);
        }

        /// Get grid dimensions
        pub fn dimensions(&self) -> (usize, usize) {
            let term = self.term.lock();
            (term.columns(), term.screen_lines())
        }
    }

    /// Event listener for terminal events
    pub struct TermEventListener;

    impl TermEventListener {
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for TermEventListener {
        fn default() -> Self {
            Self::new()
        }
    }

    impl EventListener for TermEventListener {
        fn send_event(&self, event: Event) {
            debug!("Terminal event: {:?}", event);
        }
    }

}
