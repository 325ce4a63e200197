//! Column width tables for the supported document classes
//!
//! All widths are in inches. A "wide" width is the width of a figure spanning
//! both columns (`figure*`); in one-column layouts it equals the column width.

use tracing::trace;

use crate::error::{Dimension, FormatterError, Result};
use crate::options::Columns::{One, Two};
use crate::options::{BaseSize, Columns, Paper, ParsedOptions};

/// Which option, besides the column mode, selects a width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyedBy {
    /// Widths only depend on the column mode
    Columns,
    Paper,
    FontSize,
}

/// Secondary key of a layout entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKey {
    Any,
    Paper(Paper),
    FontSize(BaseSize),
}

/// A single row of a layout table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEntry {
    pub columns: Columns,
    pub key: SizeKey,
    pub width: f64,
    pub wide_width: f64,
}

impl LayoutEntry {
    pub const fn new(columns: Columns, key: SizeKey, width: f64, wide_width: f64) -> Self {
        Self {
            columns,
            key,
            width,
            wide_width,
        }
    }
}

/// Width table of one document class
#[derive(Debug, Clone, Copy)]
pub struct LayoutSpec {
    pub keyed_by: KeyedBy,
    pub entries: &'static [LayoutEntry],
}

impl LayoutSpec {
    /// Key used to look up the given options in this table
    pub fn key_for(&self, options: &ParsedOptions) -> Option<SizeKey> {
        match self.keyed_by {
            KeyedBy::Columns => Some(SizeKey::Any),
            KeyedBy::Paper => options.paper.map(SizeKey::Paper),
            KeyedBy::FontSize => Some(SizeKey::FontSize(options.font_size)),
        }
    }

    /// Find the entry for the given options
    pub fn entry(&self, options: &ParsedOptions) -> Option<&LayoutEntry> {
        let key = self.key_for(options)?;
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.columns == options.columns && entry.key == key);
        trace!("Layout lookup for {:?}: {:?}", options, entry);
        entry
    }

    /// Column width for the given options
    pub fn width(&self, options: &ParsedOptions) -> Result<f64> {
        let width = self.entry(options).map(|entry| entry.width);
        validate_width(width, Dimension::ColumnWidth)
    }

    /// Wide (two column) width for the given options
    pub fn wide_width(&self, options: &ParsedOptions) -> Result<f64> {
        let width = self.entry(options).map(|entry| entry.wide_width);
        validate_width(width, Dimension::WideColumnWidth)
    }
}

/// Reject missing, zero, negative and non-finite widths
pub(crate) fn validate_width(width: Option<f64>, dimension: Dimension) -> Result<f64> {
    match width {
        Some(width) if width.is_finite() && width > 0.0 => Ok(width),
        _ => Err(FormatterError::NotConfigured(dimension)),
    }
}

/// Quantum journal, keyed by paper size
pub static QUANTUMARTICLE_LAYOUT: LayoutSpec = LayoutSpec {
    keyed_by: KeyedBy::Paper,
    entries: &[
        LayoutEntry::new(One, SizeKey::Paper(Paper::A4), 5.93, 5.93),
        LayoutEntry::new(One, SizeKey::Paper(Paper::Letter), 6.16, 6.16),
        LayoutEntry::new(Two, SizeKey::Paper(Paper::A4), 3.22, 6.72),
        LayoutEntry::new(Two, SizeKey::Paper(Paper::Letter), 3.34, 6.95),
    ],
};

/// APS revtex journals; the page geometry is fixed by the journal
pub static REVTEX_LAYOUT: LayoutSpec = LayoutSpec {
    keyed_by: KeyedBy::Columns,
    entries: &[
        LayoutEntry::new(One, SizeKey::Any, 3.42, 7.08),
        LayoutEntry::new(Two, SizeKey::Any, 3.42, 7.08),
    ],
};

/// IOP journals, keyed by base font size
pub static IOPART_LAYOUT: LayoutSpec = LayoutSpec {
    keyed_by: KeyedBy::FontSize,
    entries: &[
        LayoutEntry::new(One, SizeKey::FontSize(BaseSize::Ten), 6.2, 6.2),
        LayoutEntry::new(One, SizeKey::FontSize(BaseSize::Eleven), 6.2, 6.2),
        LayoutEntry::new(One, SizeKey::FontSize(BaseSize::Twelve), 6.2, 6.2),
        LayoutEntry::new(Two, SizeKey::FontSize(BaseSize::Ten), 3.29, 6.78),
        LayoutEntry::new(Two, SizeKey::FontSize(BaseSize::Eleven), 3.29, 6.78),
        LayoutEntry::new(Two, SizeKey::FontSize(BaseSize::Twelve), 3.29, 6.78),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_keyed_lookup() {
        let options = ParsedOptions::new(Two, Some(Paper::Letter), BaseSize::Eleven);
        assert_eq!(QUANTUMARTICLE_LAYOUT.width(&options).unwrap(), 3.34);
        assert_eq!(QUANTUMARTICLE_LAYOUT.wide_width(&options).unwrap(), 6.95);
    }

    #[test]
    fn test_paper_keyed_lookup_without_paper() {
        let options = ParsedOptions::new(Two, None, BaseSize::Ten);
        assert!(matches!(
            QUANTUMARTICLE_LAYOUT.width(&options),
            Err(FormatterError::NotConfigured(Dimension::ColumnWidth))
        ));
    }

    #[test]
    fn test_font_size_keyed_lookup() {
        let options = ParsedOptions::new(One, None, BaseSize::Twelve);
        assert_eq!(IOPART_LAYOUT.width(&options).unwrap(), 6.2);

        let options = ParsedOptions::new(Two, None, BaseSize::Ten);
        assert_eq!(IOPART_LAYOUT.wide_width(&options).unwrap(), 6.78);
    }

    #[test]
    fn test_columns_keyed_lookup_ignores_paper() {
        let a4 = ParsedOptions::new(One, Some(Paper::A4), BaseSize::Ten);
        let none = ParsedOptions::new(One, None, BaseSize::Ten);
        assert_eq!(REVTEX_LAYOUT.width(&a4).unwrap(), 3.42);
        assert_eq!(REVTEX_LAYOUT.width(&none).unwrap(), 3.42);
    }

    #[test]
    fn test_missing_entry_is_not_configured() {
        static EMPTY: LayoutSpec = LayoutSpec {
            keyed_by: KeyedBy::Columns,
            entries: &[LayoutEntry::new(Two, SizeKey::Any, 0.0, 7.0)],
        };
        let one = ParsedOptions::new(One, None, BaseSize::Ten);
        assert!(EMPTY.width(&one).is_err());

        let two = ParsedOptions::new(Two, None, BaseSize::Ten);
        assert!(matches!(
            EMPTY.width(&two),
            Err(FormatterError::NotConfigured(Dimension::ColumnWidth))
        ));
        assert_eq!(EMPTY.wide_width(&two).unwrap(), 7.0);
    }

    #[test]
    fn test_validate_width() {
        assert!(validate_width(Some(f64::NAN), Dimension::ColumnWidth).is_err());
        assert!(validate_width(Some(-1.0), Dimension::ColumnWidth).is_err());
        assert!(validate_width(None, Dimension::WideColumnWidth).is_err());
        assert_eq!(validate_width(Some(2.5), Dimension::ColumnWidth).unwrap(), 2.5);
    }
}
