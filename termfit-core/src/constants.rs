//! Layout constants shared by the fit calculation and its hosts
//!
//! The grid floor applies no matter how little space the container offers,
//! so a collapsed container still yields a usable terminal.

/// Smallest column count a fit will ever propose
pub const MINIMUM_COLS: usize = 2;

/// Smallest row count a fit will ever propose
pub const MINIMUM_ROWS: usize = 1;

/// Largest column or row count a headless grid will allocate
pub const MAXIMUM_GRID_DIMENSION: usize = u16::MAX as usize;

/// Computed-style property names read from the container and the terminal element
pub const PROP_WIDTH: &str = "width";
pub const PROP_HEIGHT: &str = "height";
pub const PROP_PADDING_TOP: &str = "padding-top";
pub const PROP_PADDING_BOTTOM: &str = "padding-bottom";
pub const PROP_PADDING_LEFT: &str = "padding-left";
pub const PROP_PADDING_RIGHT: &str = "padding-right";

/// Suffix appended to pixel values written back as CSS lengths
pub const PX_SUFFIX: &str = "px";
