use std::{env, error::Error};

use qrstyle::{generate, FontSource, StyleConfig, PNG_FILENAME};

// Usage: branded_generation [logo.png]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let url = "https://example.com";

    // Form defaults: purple/orange two-tone with both banners
    let config = StyleConfig { caption: "example.com".into(), ..Default::default() };

    let mut builder = config.to_builder();
    builder.fonts(FontSource::system_candidates());
    if let Some(path) = env::args().nth(1) {
        builder.logo_bytes(std::fs::read(path)?);
    }

    let params = builder.build()?;
    let out = generate(url, &params)?;

    for w in &out.warnings {
        println!("warning: {w}");
    }

    out.image.save(PNG_FILENAME)?;
    println!("Branded QR code saved to: {PNG_FILENAME}");
    println!("Canvas: {}x{}", out.image.width(), out.image.height());

    Ok(())
}
