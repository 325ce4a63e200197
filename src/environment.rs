//! Plotting environment parameters
//!
//! Formatters are pure. Pushing their font sizes and line styles into a
//! plotting environment is a separate, explicit step: [`apply_to_environment`]
//! writes a fixed set of matplotlib-style keys into a [`StyleSink`]. Every call
//! overwrites the same keys, so applying twice is the same as applying once.
//!
//! A sink is plain mutable state. Callers sharing one sink between threads
//! have to serialize the calls themselves.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, instrument};

use crate::constants::{FIGURE_DPI, LINE_WIDTH, MAJOR_TICK_SIZE, MARKER_SIZE, THIN_LINE_WIDTH};
use crate::error::Result;
use crate::formatter::FigureFormat;
use crate::style::Color;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum RcValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for RcValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RcValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for RcValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RcValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RcValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RcValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Destination for named rendering parameters
pub trait StyleSink {
    fn set(&mut self, key: &str, value: RcValue);
}

/// An ordered collection of rendering parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RcParams {
    values: BTreeMap<String, RcValue>,
}

impl RcParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RcValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Render as a matplotlib style sheet (`key: value` per line).
    ///
    /// Keys style sheets may not set, such as `backend`, are left out.
    pub fn to_style_sheet(&self) -> String {
        let mut sheet = String::new();
        for (key, value) in self.iter() {
            if STYLE_SHEET_EXCLUDED_KEYS.contains(&key) {
                continue;
            }
            sheet.push_str(key);
            sheet.push_str(": ");
            sheet.push_str(&style_sheet_value(value));
            sheet.push('\n');
        }
        sheet
    }
}

/// Keys matplotlib ignores when loading a style sheet
const STYLE_SHEET_EXCLUDED_KEYS: &[&str] = &["backend"];

/// Format a value for a style sheet, where an unquoted `#` starts a comment
fn style_sheet_value(value: &RcValue) -> String {
    let text = value.to_string();
    if !text.contains('#') {
        return text;
    }
    match Color::from_hex(&text) {
        Some(color) => color.hex().trim_start_matches('#').to_string(),
        None => format!("\"{text}\""),
    }
}

impl StyleSink for RcParams {
    fn set(&mut self, key: &str, value: RcValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Write the parameters of `format` into `sink`.
///
/// Fails if the format has no usable font sizes; nothing is written then.
#[instrument(skip_all)]
pub fn apply_to_environment<F, S>(format: &F, sink: &mut S) -> Result<()>
where
    F: FigureFormat + ?Sized,
    S: StyleSink + ?Sized,
{
    let sizes = format.font_sizes()?;
    let theme = format.theme();

    sink.set("axes.labelsize", sizes.small.into());
    sink.set("axes.titlesize", sizes.large.into());
    sink.set("xtick.labelsize", sizes.footnotesize.into());
    sink.set("ytick.labelsize", sizes.footnotesize.into());
    sink.set("font.size", sizes.small.into());

    sink.set("backend", "pgf".into());
    sink.set("pgf.texsystem", "pdflatex".into());
    sink.set("pgf.rcfonts", true.into());
    sink.set("pgf.preamble", RcValue::Str(theme.pgf_preamble.to_string()));
    sink.set("font.family", theme.font_family.as_str().into());
    sink.set("text.usetex", theme.use_tex.into());

    sink.set("xtick.major.width", THIN_LINE_WIDTH.into());
    sink.set("ytick.major.width", THIN_LINE_WIDTH.into());
    sink.set("xtick.direction", "in".into());
    sink.set("ytick.direction", "in".into());
    sink.set("xtick.major.size", MAJOR_TICK_SIZE.into());
    sink.set("ytick.major.size", MAJOR_TICK_SIZE.into());
    sink.set("lines.linewidth", LINE_WIDTH.into());
    sink.set("axes.linewidth", THIN_LINE_WIDTH.into());
    sink.set("grid.linewidth", THIN_LINE_WIDTH.into());
    sink.set("lines.markersize", MARKER_SIZE.into());

    sink.set("legend.frameon", true.into());
    sink.set("legend.framealpha", RcValue::Float(1.0));
    sink.set("legend.fancybox", false.into());

    sink.set("figure.dpi", FIGURE_DPI.into());
    sink.set("figure.facecolor", "white".into());

    if let Some(color) = theme.edge_color {
        sink.set("axes.edgecolor", color.hex().into());
    }

    debug!(
        "Applied environment with base size {}pt, {} family",
        sizes.normalsize,
        theme.font_family.as_str()
    );
    Ok(())
}
