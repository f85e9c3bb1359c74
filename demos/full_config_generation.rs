use std::error::Error;

use qrstyle::{generate, DotShape, ECLevel, FillMode, StyleBuilder, PNG_FILENAME, SVG_FILENAME};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let url = "https://example.com/this-example-shows-every-style-option";

    let mut builder = StyleBuilder::new();
    builder
        .primary("#4B1AA3")        // Dot color A
        .secondary("#F77618")      // Dot color B, used on odd rows in two-tone mode
        .background("#FFFFFF")     // Light modules, quiet zone and logo backing
        .fill(FillMode::TwoTone)   // Solid, TwoTone or Gradient
        .shape(DotShape::Rounded)  // Rounded slightly darkens dot colors
        .target_size(1200)         // Module size is floor(target / modules)
        .quiet_zone(6)             // Border in modules, 4..=8 in the form
        .ec_level(ECLevel::H);     // Defaults to H so logos stay recoverable

    println!("Style: {}", builder.metadata());
    let params = builder.build()?;
    let out = generate(url, &params)?;

    for w in &out.warnings {
        println!("warning: {w}");
    }

    std::fs::write(PNG_FILENAME, &out.png)?;
    println!("QR code saved to: {PNG_FILENAME}");

    if let Some(svg) = &out.svg {
        std::fs::write(SVG_FILENAME, svg)?;
        println!("Vector version saved to: {SVG_FILENAME}");
    }

    Ok(())
}
