//! Right-sized figures for LaTeX documents
//!
//! This library reads the preamble of a LaTeX document, recognizes its
//! document class and options, and derives the figure widths and font sizes a
//! plot needs to blend in with the surrounding text.
//!
//! ```
//! use fitfig::{FigureFormat, FigureOptions};
//!
//! let formatter = fitfig::setup(r"\documentclass[onecolumn,11pt]{quantumarticle}")?;
//! let size = formatter.figure_size(&FigureOptions::new().with_aspect_ratio(0.5))?;
//! assert_eq!(size.width, 5.93);
//! assert_eq!(formatter.font_sizes()?.normalsize, 11);
//! # Ok::<(), fitfig::FormatterError>(())
//! ```
//!
//! Supported classes are `quantumarticle`, `revtex4-1`/`revtex4-2` and
//! `iopart`. Other documents can use a [`CustomFormatter`] with explicit
//! widths.

pub mod constants;
pub mod document_class;
pub mod environment;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod options;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod preamble;
pub mod registry;
pub mod style;

pub use document_class::DocumentClass;
pub use environment::{RcParams, RcValue, StyleSink, apply_to_environment};
pub use error::{Dimension, FormatterError, Result};
pub use formatter::{ClassFormatter, CustomFormatter, FigureFormat, FigureOptions, FigureSize};
pub use options::{BaseSize, Columns, Paper, ParsedOptions};
#[cfg(feature = "pdf")]
pub use pdf::FigureInspect;
pub use registry::{Registry, setup, setup_path};
pub use style::{Color, FontFamily, FontSizes, Theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_and_apply() {
        let formatter = setup(r"\documentclass[letterpaper]{quantumarticle}").unwrap();
        assert_eq!(formatter.column_width().unwrap(), 3.34);
        assert_eq!(formatter.wide_column_width().unwrap(), 6.95);

        let mut params = RcParams::new();
        apply_to_environment(&formatter, &mut params).unwrap();
        assert_eq!(params.get("font.size"), Some(&RcValue::Int(9)));
    }

    #[test]
    fn test_default_quantumarticle_square_figure() {
        let formatter = setup(r"\documentclass{quantumarticle}").unwrap();
        let size = formatter
            .figure_size(&FigureOptions::new().with_aspect_ratio(1.0))
            .unwrap();
        assert_eq!(size, FigureSize::new(3.22, 3.22));
    }

    #[test]
    fn test_custom_formatter_multiply_convention() {
        let formatter = CustomFormatter::new()
            .with_column_width(1.0)
            .with_wide_column_width(2.0);
        let size = formatter
            .figure_size(
                &FigureOptions::new()
                    .with_aspect_ratio(1.0)
                    .with_width_ratio(1.0)
                    .with_wide(true),
            )
            .unwrap();
        assert_eq!(size, FigureSize::new(2.0, 2.0));

        let size = formatter
            .figure_size(
                &FigureOptions::new()
                    .with_aspect_ratio(0.5)
                    .with_wide(true),
            )
            .unwrap();
        assert_eq!(size, FigureSize::new(2.0, 1.0));
    }
}
