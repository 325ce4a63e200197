//! Basic setup example
//!
//! Usage: `cargo run --example basic_setup -- [paper.tex]`

use fitfig::{FigureFormat, FigureOptions, RcParams, apply_to_environment};
use tracing_subscriber::EnvFilter;

const SAMPLE_PREAMBLE: &str = r"\documentclass[twocolumn,letterpaper,11pt]{quantumarticle}
\usepackage{amsmath}
% \documentclass{revtex4-1}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // A path to a TeX file or the sample preamble
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SAMPLE_PREAMBLE.to_string());
    let formatter = fitfig::setup(&source)?;

    println!("Document class: {}", formatter.class());
    println!("Column width: {} in", formatter.column_width()?);
    println!("Wide column width: {} in", formatter.wide_column_width()?);

    // Figures for the paper
    let figures = [
        ("default", FigureOptions::new()),
        ("square", FigureOptions::new().with_aspect_ratio(1.0)),
        ("half width", FigureOptions::new().with_width_ratio(0.5)),
        ("wide", FigureOptions::new().with_wide(true)),
    ];
    for (name, options) in &figures {
        let size = formatter.figure_size(options)?;
        let (width_pt, height_pt) = size.to_points();
        println!("{name:>10}: {size} ({width_pt:.1} x {height_pt:.1} pt)");
    }

    // Push the fonts and line styles into a style sheet
    let mut params = RcParams::new();
    apply_to_environment(&formatter, &mut params)?;
    print!("{}", params.to_style_sheet());

    Ok(())
}
