//! Constants for figure dimensions and rendering defaults

/// Default aspect ratio (height / width), the inverse of the golden ratio
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0 / 1.62;

/// Default figure width as a fraction of the column width
pub const DEFAULT_WIDTH_RATIO: f64 = 1.0;

/// Resolution figures are created with
pub const FIGURE_DPI: u32 = 120;

/// PostScript points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Line width used for ticks, axes and grid lines
pub const THIN_LINE_WIDTH: f64 = 0.5;

/// Width of plotted lines
pub const LINE_WIDTH: f64 = 1.0;

/// Length of major ticks
pub const MAJOR_TICK_SIZE: f64 = 4.0;

/// Marker size for plotted lines
pub const MARKER_SIZE: f64 = 3.0;

/// Comment marker in TeX sources
pub const COMMENT_MARKER: char = '%';
