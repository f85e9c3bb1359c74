use std::error::Error;

use qrstyle::{generate, StyleBuilder, PNG_FILENAME};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let url = "https://example.com";

    let params = StyleBuilder::new().build()?; // Black on white, 1000px target, level H
    let out = generate(url, &params)?;

    std::fs::write(PNG_FILENAME, &out.png)?;

    println!("QR code saved to: {PNG_FILENAME}");
    println!("Canvas: {}x{}, {} px per module", out.image.width(), out.image.height(), out.module_px);

    Ok(())
}
