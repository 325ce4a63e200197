//! Custom formatter example
//!
//! Figures for a document class that is not supported out of the box.

use fitfig::{
    CustomFormatter, FigureFormat, FigureOptions, FontSizes, RcParams, apply_to_environment,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // A single column journal with a 12pt body
    let formatter = CustomFormatter::new()
        .with_column_width(5.5)
        .with_font_size(12)
        .with_pgf_preamble(r"\usepackage{times}");

    let size = formatter.figure_size(&FigureOptions::new().with_aspect_ratio(0.75))?;
    println!("Figure: {size}");

    // Wide figures fall back to the column width
    let wide = formatter.figure_size(&FigureOptions::new().with_wide(true))?;
    println!("Wide figure: {wide}");

    // Hand-picked font sizes
    let poster = CustomFormatter::new()
        .with_column_width(10.0)
        .with_wide_column_width(20.0)
        .with_font_sizes(FontSizes {
            small: 16,
            footnotesize: 14,
            large: 20,
            ..FontSizes::default()
        });

    let mut params = RcParams::new();
    apply_to_environment(&poster, &mut params)?;
    for (key, value) in params.iter() {
        println!("{key} = {value}");
    }

    // Missing widths are reported, not guessed
    if let Err(err) = CustomFormatter::new().figure_size(&FigureOptions::new()) {
        println!("Unconfigured formatter: {err}");
    }

    Ok(())
}
