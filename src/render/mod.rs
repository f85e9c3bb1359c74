pub mod banner;
pub mod finder;
pub mod font;
pub mod logo;
pub mod vector;

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::builder::{DotShape, FillMode, StyleParameters};
use crate::common::{
    color::{darken, lerp, RgbColor},
    error::{QRError, QRResult},
    matrix::ModuleMatrix,
};

/// Multiplier applied to dot pixels in [`DotShape::Rounded`] mode.
pub const ROUNDED_DARKEN: f64 = 0.9;

pub const PNG_FILENAME: &str = "qr_premium.png";
pub const PNG_MIME: &str = "image/png";

/// Pixels per module for a `target` px canvas, floored. Zero is an error.
pub fn module_px(target: u32, modules: usize) -> QRResult<u32> {
    let px = target as usize / modules.max(1);
    if px == 0 {
        return Err(QRError::ModuleSizeTooSmall { target, modules });
    }
    u32::try_from(px).map_err(|_| QRError::RenderFailure(format!("module size {px} overflows")))
}

// Rasterizer
//------------------------------------------------------------------------------

/// Paints every dark module as a `module_px` square on a background-filled canvas
/// exactly `width * module_px` pixels wide.
pub fn rasterize(matrix: &ModuleMatrix, params: &StyleParameters, module_px: u32) -> RgbImage {
    let side = matrix.width() as u32 * module_px;
    let mut canvas = RgbImage::from_pixel(side, side, params.background);

    let shape = |clr: RgbColor| match params.shape {
        DotShape::Square => clr,
        DotShape::Rounded => darken(clr, ROUNDED_DARKEN),
    };

    for (r, row) in matrix.rows().enumerate() {
        let row_clr = shape(params.row_color(r));
        let y0 = r as u32 * module_px;
        for (c, _) in row.iter().enumerate().filter(|&(_, &dark)| dark) {
            let x0 = c as u32 * module_px;
            match params.fill {
                FillMode::Solid | FillMode::TwoTone => {
                    let block = Rect::at(x0 as i32, y0 as i32).of_size(module_px, module_px);
                    draw_filled_rect_mut(&mut canvas, block, row_clr);
                }
                FillMode::Gradient => {
                    for y in y0..y0 + module_px {
                        let t = y as f64 / side as f64;
                        let clr = shape(lerp(params.primary, params.background, t));
                        for x in x0..x0 + module_px {
                            canvas.put_pixel(x, y, clr);
                        }
                    }
                }
            }
        }
    }

    canvas
}

pub fn encode_png(canvas: &RgbImage) -> QRResult<Vec<u8>> {
    let mut buf = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod render_tests {
    use image::{GenericImageView, Rgb};
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{encode_png, module_px, rasterize};
    use crate::builder::{DotShape, FillMode, StyleBuilder};
    use crate::common::{error::QRError, matrix::ModuleMatrix};

    fn checker_matrix(w: usize) -> ModuleMatrix {
        let rows: Vec<Vec<bool>> = (0..w).map(|r| (0..w).map(|c| (r + c) % 2 == 0).collect()).collect();
        ModuleMatrix::from_rows(&rows, 0).unwrap()
    }

    #[test_case(1000, 37, 27)]
    #[test_case(600, 29, 20)]
    #[test_case(1400, 177, 7)]
    #[test_case(21, 21, 1)]
    fn test_module_px(target: u32, modules: usize, exp: u32) {
        assert_eq!(module_px(target, modules).unwrap(), exp);
    }

    #[test]
    fn test_module_px_zero() {
        assert_eq!(
            module_px(20, 21).unwrap_err(),
            QRError::ModuleSizeTooSmall { target: 20, modules: 21 }
        );
    }

    #[test]
    fn test_solid_blocks() {
        let params = StyleBuilder::new().primary("#102030").background("#F0F0F0").build().unwrap();
        let m = checker_matrix(21);
        let img = rasterize(&m, &params, 3);
        assert_eq!(img.dimensions(), (63, 63));
        // (0, 0) dark, (1, 0) light; block edges are half-open
        assert_eq!(*img.get_pixel(2, 2), Rgb([0x10, 0x20, 0x30]));
        assert_eq!(*img.get_pixel(3, 0), Rgb([0xF0, 0xF0, 0xF0]));
        assert_eq!(*img.get_pixel(5, 2), Rgb([0xF0, 0xF0, 0xF0]));
        assert_eq!(*img.get_pixel(6, 0), Rgb([0x10, 0x20, 0x30]));
    }

    #[test]
    fn test_two_tone_rows() {
        let params = StyleBuilder::new()
            .primary("#4B1AA3")
            .secondary("#F77618")
            .fill(FillMode::TwoTone)
            .build()
            .unwrap();
        let img = rasterize(&checker_matrix(21), &params, 2);
        // Row 0 col 0 dark, row 1 col 1 dark
        assert_eq!(*img.get_pixel(0, 0), Rgb([0x4B, 0x1A, 0xA3]));
        assert_eq!(*img.get_pixel(2, 2), Rgb([0xF7, 0x76, 0x18]));
        assert_eq!(*img.get_pixel(4, 4), Rgb([0x4B, 0x1A, 0xA3]));
    }

    #[test]
    fn test_gradient_only_touches_dark_pixels() {
        let params = StyleBuilder::new().fill(FillMode::Gradient).build().unwrap();
        let img = rasterize(&checker_matrix(21), &params, 4);
        let h = img.height() as f64;
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
        // Module (20, 20) is dark; its last pixel row is near the bottom
        let y = 83;
        let exp = (255.0 * y as f64 / h).round() as u8;
        assert_eq!(*img.get_pixel(80, y), Rgb([exp; 3]));
        // Light modules keep the background untouched
        assert_eq!(*img.get_pixel(4, 83), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_rounded_darkens() {
        let params = StyleBuilder::new().primary("#646464").shape(DotShape::Rounded).build().unwrap();
        let img = rasterize(&checker_matrix(21), &params, 1);
        assert_eq!(*img.get_pixel(0, 0), Rgb([90, 90, 90]));
        assert_eq!(*img.get_pixel(1, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_png_header() {
        let params = StyleBuilder::new().build().unwrap();
        let png = encode_png(&rasterize(&checker_matrix(21), &params, 2)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (42, 42));
    }

    proptest! {
        #[test]
        fn proptest_canvas_dimensions(w in 21usize..60, target in 100u32..1500) {
            let params = StyleBuilder::new().target_size(target).build().unwrap();
            let m = checker_matrix(w);
            if let Ok(px) = module_px(target, w) {
                let img = rasterize(&m, &params, px);
                prop_assert_eq!(img.dimensions(), (w as u32 * px, w as u32 * px));
                // Module (w - 1, w - 1) is always dark in a checkerboard
                let last = *img.get_pixel(img.width() - 1, img.height() - 1);
                prop_assert_eq!(last, params.primary);
            } else {
                prop_assert!(target < w as u32);
            }
        }
    }
}
