//! # qrstyle
//!
//! A Rust library for rendering branded QR codes that stay scannable: custom dot
//! colors, two-tone and gradient fills, a centred logo, text banners and an SVG
//! export of the bare symbol.
//!
//! ## Pipeline
//!
//! Every generation runs the same stages, driven by one [`StyleParameters`] record:
//!
//! 1. **Encode** the text into a [`ModuleMatrix`] at the highest error correction
//!    level, with a quiet zone border.
//! 2. **Rasterize** dark modules with the chosen [`FillMode`] and [`DotShape`].
//! 3. **Reinforce** the three finder patterns with pure dark/light/dark squares, so
//!    styling can never break scanner lock-on.
//! 4. **Composite** an optional logo on a circular backing disk capped at 22% of the
//!    symbol width.
//! 5. **Extend** the canvas with optional top/bottom banners and a caption.
//! 6. **Export** PNG bytes and, with the `svg` feature, an SVG of the symbol.
//!
//! Low-contrast color choices are reported as [`Warning`]s and never block
//! generation.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrstyle::{generate, FillMode, StyleBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = StyleBuilder::new()
//!     .primary("#4B1AA3")
//!     .secondary("#F77618")
//!     .fill(FillMode::TwoTone)
//!     .target_size(1000)
//!     .build()?;
//!
//! let out = generate("https://example.com", &params)?;
//! for w in &out.warnings {
//!     eprintln!("warning: {w}");
//! }
//! assert!(!out.png.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Banners and logos
//!
//! ```rust
//! use qrstyle::{generate, FontSource, StyleBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = image::DynamicImage::new_rgba8(64, 64);
//! let params = StyleBuilder::new()
//!     .logo(logo)
//!     .top_banner("Ship With Us", "#5C2D91", "#FFFFFF")
//!     .bottom_banner("Scan to visit our site", "#5C2D91", "#FFFFFF")
//!     .fonts(FontSource::system_candidates())
//!     .build()?;
//!
//! let out = generate("https://example.com", &params)?;
//! assert!(out.image.height() > out.image.width());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub(crate) mod common;
pub mod config;
pub mod render;

pub use builder::{
    check_contrast, generate, generate_from_matrix, Banner, DotShape, FillMode, Generated, Logo,
    StyleBuilder, StyleParameters,
};
pub use common::color::{contrast_ratio, hex_to_rgb, relative_luminance, rgb_to_hex, RgbColor};
pub use common::error::{ContrastSubject, QRError, QRResult, Warning};
pub use common::matrix::{ECLevel, ModuleMatrix};
pub use config::StyleConfig;
pub use render::font::FontSource;
pub use render::vector::{vector_export_available, SVG_FILENAME, SVG_MIME};
pub use render::{PNG_FILENAME, PNG_MIME};
