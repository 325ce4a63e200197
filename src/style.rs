//! Styling structures: font size palettes, colors and per-class themes

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;
use crate::options::BaseSize;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Gray color
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// The standard named LaTeX font sizes, in points.
///
/// Field names follow the LaTeX size commands (`\Large`, `\LARGE`, ...).
/// The default is the palette of a 10pt document.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub tiny: u32,
    pub scriptsize: u32,
    pub footnotesize: u32,
    pub small: u32,
    pub normalsize: u32,
    pub large: u32,
    pub Large: u32,
    pub LARGE: u32,
    pub huge: u32,
    pub Huge: u32,
}

/// Palette of a 10pt document
pub const FONT_SIZES_10: FontSizes = FontSizes {
    tiny: 5,
    scriptsize: 7,
    footnotesize: 8,
    small: 9,
    normalsize: 10,
    large: 12,
    Large: 14,
    LARGE: 17,
    huge: 20,
    Huge: 25,
};

/// Palette of an 11pt document
pub const FONT_SIZES_11: FontSizes = FontSizes {
    tiny: 6,
    scriptsize: 8,
    footnotesize: 9,
    small: 10,
    normalsize: 11,
    large: 12,
    Large: 14,
    LARGE: 17,
    huge: 20,
    Huge: 25,
};

/// Palette of a 12pt document
pub const FONT_SIZES_12: FontSizes = FontSizes {
    tiny: 6,
    scriptsize: 8,
    footnotesize: 10,
    small: 11,
    normalsize: 12,
    large: 14,
    Large: 17,
    LARGE: 20,
    huge: 25,
    Huge: 25,
};

impl FontSizes {
    /// Palette for a supported base size
    pub fn for_base_size(size: BaseSize) -> &'static FontSizes {
        match size {
            BaseSize::Ten => &FONT_SIZES_10,
            BaseSize::Eleven => &FONT_SIZES_11,
            BaseSize::Twelve => &FONT_SIZES_12,
        }
    }

    /// Palette for a base size given in points
    pub fn for_points(points: u8) -> Result<&'static FontSizes> {
        let size = BaseSize::try_from(points)?;
        Ok(Self::for_base_size(size))
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        FONT_SIZES_10
    }
}

/// A color a document class defines for its own use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

/// Font family used for figure text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SansSerif
    }
}

/// Rendering choices that are fixed per document class
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub font_family: FontFamily,
    /// Whether figure text is typeset by TeX
    pub use_tex: bool,
    /// Extra packages loaded by the pgf backend
    pub pgf_preamble: Cow<'static, str>,
    pub edge_color: Option<Color>,
    pub colors: &'static [NamedColor],
}

impl Theme {
    /// Look up one of the class colors by name
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors
            .iter()
            .find(|named| named.name == name)
            .map(|named| named.color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: FontFamily::SansSerif,
            use_tex: false,
            pgf_preamble: Cow::Borrowed(""),
            edge_color: None,
            colors: &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatterError;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(FontSizes::for_base_size(BaseSize::Ten).small, 9);
        assert_eq!(FontSizes::for_base_size(BaseSize::Eleven).footnotesize, 9);
        assert_eq!(FontSizes::for_base_size(BaseSize::Twelve).Huge, 25);
        assert_eq!(FontSizes::default(), FONT_SIZES_10);
    }

    #[test]
    fn test_palette_for_points() {
        assert_eq!(FontSizes::for_points(12).unwrap().normalsize, 12);
        assert!(matches!(
            FontSizes::for_points(9),
            Err(FormatterError::UnsupportedFontSize(9))
        ));
    }

    #[test]
    fn test_color_hex() {
        let violet = Color::from_hex("#53257F").unwrap();
        assert_eq!(violet, Color::rgb(0x53, 0x25, 0x7F));
        assert_eq!(violet.hex(), "#53257F");
        assert_eq!(Color::gray(0x55).to_string(), "#555555");
        assert!(Color::from_hex("#5525").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }
}
