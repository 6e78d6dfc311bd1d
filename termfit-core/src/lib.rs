pub mod config;
pub mod constants;
pub mod fit;
pub mod font;
pub mod geometry;
#[cfg(feature = "headless")]
pub mod headless;
pub mod style;
pub mod surface;
pub mod terminal;
#[cfg(feature = "web")]
pub mod web;

pub use config::{Config, ConfigError};
pub use fit::{fit, propose_dimensions, FitCalculator, FitOptions};
pub use font::FontMetrics;
pub use geometry::{CellMetrics, GridSize, LayoutMeasurement};
#[cfg(feature = "headless")]
pub use headless::{ElementNode, HeadlessTerminal};
pub use style::{ComputedStyle, StyleMap};
pub use surface::{BackingSurface, PixelSurface};
pub use terminal::{CellMetricsProvider, LayoutElement, TerminalHandle};
