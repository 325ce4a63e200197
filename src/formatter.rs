//! Formatters: figure dimensions and font sizes matching a document

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::constants::{DEFAULT_ASPECT_RATIO, DEFAULT_WIDTH_RATIO, POINTS_PER_INCH};
use crate::document_class::DocumentClass;
use crate::error::{Dimension, FormatterError, Result};
use crate::layout::validate_width;
use crate::options::ParsedOptions;
use crate::style::{Color, FontSizes, Theme};

/// Requested shape of a figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOptions {
    /// Height divided by width
    pub aspect_ratio: f64,
    /// Width in multiples of the (wide) column width
    pub width_ratio: f64,
    /// Span both columns (`figure*`). Has no effect in one-column layouts.
    pub wide: bool,
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_width_ratio(mut self, width_ratio: f64) -> Self {
        self.width_ratio = width_ratio;
        self
    }

    pub fn with_wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            width_ratio: DEFAULT_WIDTH_RATIO,
            wide: false,
        }
    }
}

/// Figure dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height divided by width
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }

    /// Dimensions in PostScript points
    pub fn to_points(&self) -> (f64, f64) {
        (self.width * POINTS_PER_INCH, self.height * POINTS_PER_INCH)
    }

    /// Compare both dimensions with an absolute tolerance in inches
    pub fn approx_eq(&self, other: &FigureSize, tolerance: f64) -> bool {
        (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

impl fmt::Display for FigureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}in x {:.3}in", self.width, self.height)
    }
}

/// Anything that knows the column widths and font sizes of a document
pub trait FigureFormat {
    /// Width of a single column figure in inches
    fn column_width(&self) -> Result<f64>;

    /// Width of a figure spanning both columns in inches
    fn wide_column_width(&self) -> Result<f64>;

    /// Named font sizes of the document
    fn font_sizes(&self) -> Result<FontSizes>;

    /// Rendering choices tied to the document
    fn theme(&self) -> &Theme;

    /// Size of a figure with the requested shape.
    ///
    /// The height is `width * aspect_ratio`. Only the width that is actually
    /// used has to be configured.
    fn figure_size(&self, options: &FigureOptions) -> Result<FigureSize> {
        validate_ratio("width ratio", options.width_ratio)?;
        validate_ratio("aspect ratio", options.aspect_ratio)?;

        let base_width = if options.wide {
            self.wide_column_width()?
        } else {
            self.column_width()?
        };

        let width = base_width * options.width_ratio;
        let height = width * options.aspect_ratio;
        trace!("Figure size for {:?}: {} x {}", options, width, height);

        Ok(FigureSize::new(width, height))
    }
}

fn validate_ratio(name: &'static str, ratio: f64) -> Result<()> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(FormatterError::InvalidRatio(name, ratio))
    }
}

/// Formatter for a recognized document class
#[derive(Debug, Clone, Copy)]
pub struct ClassFormatter {
    class: &'static DocumentClass,
    options: ParsedOptions,
}

impl ClassFormatter {
    /// Create a formatter for `class` with explicit options
    pub fn new(class: &'static DocumentClass, options: ParsedOptions) -> Self {
        Self { class, options }
    }

    pub fn class(&self) -> &'static DocumentClass {
        self.class
    }

    pub fn options(&self) -> &ParsedOptions {
        &self.options
    }

    /// One of the colors the document class defines
    pub fn color(&self, name: &str) -> Option<Color> {
        self.class.theme.color(name)
    }
}

impl FigureFormat for ClassFormatter {
    fn column_width(&self) -> Result<f64> {
        self.class.layout.width(&self.options)
    }

    fn wide_column_width(&self) -> Result<f64> {
        self.class.layout.wide_width(&self.options)
    }

    fn font_sizes(&self) -> Result<FontSizes> {
        Ok(*FontSizes::for_base_size(self.options.font_size))
    }

    fn theme(&self) -> &Theme {
        &self.class.theme
    }
}

impl PartialEq for ClassFormatter {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.class, other.class) && self.options == other.options
    }
}

/// Where a custom formatter takes its font sizes from
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Standard palette for a base size in points
    BaseSize(u8),
    Custom(FontSizes),
}

impl Default for Palette {
    fn default() -> Self {
        Self::BaseSize(10)
    }
}

/// Formatter for documents whose class is not supported.
///
/// Widths are given explicitly. The wide width falls back to the column width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFormatter {
    column_width: Option<f64>,
    wide_column_width: Option<f64>,
    palette: Palette,
    theme: Theme,
}

impl CustomFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width of a single column figure in inches
    pub fn with_column_width(mut self, width: f64) -> Self {
        self.column_width = Some(width);
        self
    }

    /// Set the width of a two column figure in inches
    pub fn with_wide_column_width(mut self, width: f64) -> Self {
        self.wide_column_width = Some(width);
        self
    }

    /// Use the standard palette of a 10, 11 or 12pt document
    pub fn with_font_size(mut self, points: u8) -> Self {
        self.palette = Palette::BaseSize(points);
        self
    }

    /// Use explicit font sizes
    pub fn with_font_sizes(mut self, sizes: FontSizes) -> Self {
        self.palette = Palette::Custom(sizes);
        self
    }

    /// Additional packages for the pgf backend, e.g. to switch fonts
    pub fn with_pgf_preamble<S: Into<String>>(mut self, preamble: S) -> Self {
        self.theme.pgf_preamble = Cow::Owned(preamble.into());
        self
    }

    /// Replace the theme entirely
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl FigureFormat for CustomFormatter {
    fn column_width(&self) -> Result<f64> {
        validate_width(self.column_width, Dimension::ColumnWidth)
    }

    fn wide_column_width(&self) -> Result<f64> {
        validate_width(
            self.wide_column_width.or(self.column_width),
            Dimension::WideColumnWidth,
        )
    }

    fn font_sizes(&self) -> Result<FontSizes> {
        match &self.palette {
            Palette::BaseSize(points) => FontSizes::for_points(*points).copied(),
            Palette::Custom(sizes) => Ok(*sizes),
        }
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }
}
