use image::{
    imageops::{self, FilterType},
    DynamicImage, Rgb, RgbImage, Rgba, RgbaImage,
};

use crate::common::color::RgbColor;

/// Logo diameter as a percentage of canvas width. Level H tolerates roughly 30%
/// damage, so this keeps a margin.
pub const LOGO_PERCENT: u32 = 22;

pub fn logo_diameter(canvas_w: u32) -> u32 {
    canvas_w * LOGO_PERCENT / 100
}

/// Builds the opaque backing disk: background fill with the logo stretched over it,
/// blended through the logo's own alpha.
fn backing_disk(logo: &DynamicImage, d: u32, background: RgbColor) -> RgbaImage {
    let Rgb([r, g, b]) = background;
    let mut disk = RgbaImage::from_pixel(d, d, Rgba([r, g, b, 255]));
    let resized = imageops::resize(&logo.to_rgba8(), d, d, FilterType::Lanczos3);
    imageops::overlay(&mut disk, &resized, 0, 0);
    disk
}

/// Pastes `logo` on a circular disk centred on the canvas. Only pixels whose
/// centre lies within `diameter / 2` of the canvas centre change.
pub fn composite_logo(canvas: &mut RgbImage, logo: &DynamicImage, background: RgbColor) {
    let (w, h) = canvas.dimensions();
    let d = logo_diameter(w.min(h));
    if d == 0 {
        log::debug!("Canvas too small for a logo, skipping");
        return;
    }

    let disk = backing_disk(logo, d, background);
    let (ox, oy) = ((w - d) / 2, (h - d) / 2);
    let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
    let r2 = (d as f64 / 2.0).powi(2);

    for (dx, dy, px) in disk.enumerate_pixels() {
        let (x, y) = (ox + dx, oy + dy);
        let (fx, fy) = (x as f64 + 0.5 - cx, y as f64 + 0.5 - cy);
        if fx * fx + fy * fy <= r2 {
            let Rgba([r, g, b, _]) = *px;
            canvas.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
}
