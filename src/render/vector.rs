//! SVG export of the bare symbol. Logos and banners are raster-only.
//!
//! Needs the `svg` feature; without it [`export_svg`] reports
//! [`QRError::VectorExportUnavailable`](crate::QRError::VectorExportUnavailable) and the raster path carries on.

use crate::builder::StyleParameters;
use crate::common::{error::QRResult, matrix::ModuleMatrix};

pub const SVG_FILENAME: &str = "qr_premium.svg";
pub const SVG_MIME: &str = "image/svg+xml";

pub fn vector_export_available() -> bool {
    cfg!(feature = "svg")
}

/// Dark module color for row `r`, mirroring the rasterizer. Gradients are sampled
/// once per module row, at the row centre.
#[cfg(any(feature = "svg", test))]
pub(crate) fn vector_row_color(
    params: &StyleParameters,
    r: usize,
    rows: usize,
) -> crate::common::color::RgbColor {
    use crate::builder::{DotShape, FillMode};
    use crate::common::color::{darken, lerp};
    use crate::render::ROUNDED_DARKEN;

    let clr = match params.fill {
        FillMode::Solid | FillMode::TwoTone => params.row_color(r),
        FillMode::Gradient => {
            let t = (r as f64 + 0.5) / rows as f64;
            lerp(params.primary, params.background, t)
        }
    };
    match params.shape {
        DotShape::Square => clr,
        DotShape::Rounded => darken(clr, ROUNDED_DARKEN),
    }
}

#[cfg(feature = "svg")]
pub fn export_svg(matrix: &ModuleMatrix, params: &StyleParameters, module_px: u32) -> QRResult<String> {
    use svg::{node::element::Rectangle, Document};

    use crate::common::color::{rgb_to_hex, RgbColor};
    use crate::render::finder::finder_squares;

    let p = module_px as usize;
    let side = matrix.width() * p;
    let rect = |x: usize, y: usize, sz: usize, clr: RgbColor| {
        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", sz)
            .set("height", sz)
            .set("fill", rgb_to_hex(clr))
    };

    let mut doc = Document::new()
        .set("width", side)
        .set("height", side)
        .set("viewBox", (0, 0, side, side))
        .add(rect(0, 0, side, params.background));

    for (r, row) in matrix.rows().enumerate() {
        let clr = vector_row_color(params, r, matrix.width());
        for (c, _) in row.iter().enumerate().filter(|&(_, &dark)| dark) {
            doc = doc.add(rect(c * p, r * p, p, clr));
        }
    }

    for (x, y, sz, clr) in finder_squares(matrix, params.background) {
        doc = doc.add(rect(x * p, y * p, sz * p, clr));
    }

    Ok(doc.to_string())
}

#[cfg(not(feature = "svg"))]
pub fn export_svg(
    _matrix: &ModuleMatrix,
    _params: &StyleParameters,
    _module_px: u32,
) -> QRResult<String> {
    Err(crate::common::error::QRError::VectorExportUnavailable)
}
