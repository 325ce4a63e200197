//! Check an exported figure against the size the document expects
//!
//! Usage: `cargo run --example check_figure_pdf -- figure.pdf paper.tex [--wide]`

use fitfig::{FigureFormat, FigureInspect, FigureOptions};
use lopdf::Document;
use tracing_subscriber::EnvFilter;

/// Allowed deviation in inches
const TOLERANCE: f64 = 0.01;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(pdf_path), Some(tex_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: check_figure_pdf <figure.pdf> <paper.tex> [--wide]");
        std::process::exit(2);
    };
    let wide = args.any(|arg| arg == "--wide");

    let formatter = fitfig::setup_path(&tex_path)?;
    let doc = Document::load(&pdf_path)?;
    let actual = doc.figure_size()?;

    // Only the width is fixed by the document; keep the figure's own aspect ratio
    let options = FigureOptions::new()
        .with_wide(wide)
        .with_aspect_ratio(actual.aspect_ratio());
    let expected = formatter.figure_size(&options)?;

    if doc.matches_figure(&expected, TOLERANCE)? {
        println!("{pdf_path}: {actual} fits {}", formatter.class());
    } else {
        println!(
            "{pdf_path}: {actual}, but {} expects {expected}",
            formatter.class()
        );
        std::process::exit(1);
    }

    Ok(())
}
