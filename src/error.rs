//! Error types for the fitfig library

use std::fmt;

use thiserror::Error;

/// Result type alias using FormatterError
pub type Result<T> = std::result::Result<T, FormatterError>;

/// A dimension a formatter has to provide before a figure can be sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    ColumnWidth,
    WideColumnWidth,
    FontSizes,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ColumnWidth => "column width",
            Self::WideColumnWidth => "wide column width",
            Self::FontSizes => "font sizes",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when deriving figure formats
#[derive(Debug, Error)]
pub enum FormatterError {
    /// A width or palette was required but is missing or not positive
    #[error("The formatter's {0} was not set")]
    NotConfigured(Dimension),

    /// A figure ratio is zero, negative or not finite
    #[error("Invalid {0}: {1}, expected a positive number")]
    InvalidRatio(&'static str, f64),

    /// Base font size outside of the 10/11/12pt palettes
    #[error("Unsupported base font size: {0}pt")]
    UnsupportedFontSize(u8),

    /// No registered document class matched the input
    #[error(
        "No formatter was found for the given argument. Either the document class is not \
         supported, or the given file path does not exist"
    )]
    NoMatch,

    /// Reading a source document failed
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying lopdf library
    #[cfg(feature = "pdf")]
    #[error("PDF operation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The figure PDF has no pages
    #[cfg(feature = "pdf")]
    #[error("Figure PDF has no pages")]
    NoPages,

    /// The first page of the figure PDF carries no usable MediaBox
    #[cfg(feature = "pdf")]
    #[error("Figure PDF page has no valid MediaBox")]
    MissingMediaBox,
}
