//! Document options a class declaration can set

use std::fmt;

use crate::error::{FormatterError, Result};

/// Column layout of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Columns {
    One,
    Two,
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("onecolumn"),
            Self::Two => f.write_str("twocolumn"),
        }
    }
}

/// Paper size of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paper {
    A4,
    Letter,
}

impl Default for Paper {
    fn default() -> Self {
        Self::A4
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => f.write_str("a4paper"),
            Self::Letter => f.write_str("letterpaper"),
        }
    }
}

/// Nominal text size of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseSize {
    Ten,
    Eleven,
    Twelve,
}

impl BaseSize {
    pub fn points(&self) -> u8 {
        match self {
            Self::Ten => 10,
            Self::Eleven => 11,
            Self::Twelve => 12,
        }
    }
}

impl Default for BaseSize {
    fn default() -> Self {
        Self::Ten
    }
}

impl TryFrom<u8> for BaseSize {
    type Error = FormatterError;

    fn try_from(points: u8) -> Result<Self> {
        match points {
            10 => Ok(Self::Ten),
            11 => Ok(Self::Eleven),
            12 => Ok(Self::Twelve),
            other => Err(FormatterError::UnsupportedFontSize(other)),
        }
    }
}

impl fmt::Display for BaseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.points())
    }
}

/// Maps option tokens to values.
///
/// Tokens are tested in order against the whole text; the first one present
/// wins, otherwise the default applies.
#[derive(Debug, Clone, Copy)]
pub struct OptionRule<T: 'static> {
    pub tokens: &'static [(&'static str, T)],
    pub default: T,
}

impl<T: Copy> OptionRule<T> {
    pub const fn new(tokens: &'static [(&'static str, T)], default: T) -> Self {
        Self { tokens, default }
    }

    pub fn resolve(&self, text: &str) -> T {
        self.tokens
            .iter()
            .find(|(token, _)| text.contains(*token))
            .map(|&(_, value)| value)
            .unwrap_or(self.default)
    }
}

/// Options extracted from a class declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedOptions {
    pub columns: Columns,
    /// `None` for classes whose layout does not depend on the paper
    pub paper: Option<Paper>,
    pub font_size: BaseSize,
}

impl ParsedOptions {
    pub fn new(columns: Columns, paper: Option<Paper>, font_size: BaseSize) -> Self {
        Self {
            columns,
            paper,
            font_size,
        }
    }
}
