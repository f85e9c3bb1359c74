use image::{imageops, RgbImage};

use super::font::ResolvedFont;
use crate::builder::{Banner, StyleParameters};

/// Band heights as percentages of the QR canvas width.
pub const TOP_BAND_PERCENT: u32 = 20;
pub const BOTTOM_BAND_PERCENT: u32 = 22;
pub const CAPTION_BAND_PERCENT: u32 = 15;

fn banner_text(b: &Option<Banner>) -> Option<&str> {
    b.as_ref().map(|b| b.text.as_str())
}

fn band_height(text: Option<&str>, qr_w: u32, percent: u32) -> u32 {
    match text {
        Some(t) if !t.is_empty() => qr_w * percent / 100,
        _ => 0,
    }
}

/// Paints a band colored strip at `y0` with `text` centred in it. Text that
/// overflows the strip is clipped to it.
fn draw_band(
    canvas: &mut RgbImage,
    font: &ResolvedFont,
    y0: u32,
    h: u32,
    banner: &Banner,
    font_size: u32,
) {
    let w = canvas.width();
    let mut strip = RgbImage::from_pixel(w, h, banner.band);

    let tw = font.text_width(&banner.text, font_size);
    let x = (w as i32 - tw as i32) / 2;
    let y = (h as i32 - font_size as i32) / 2;
    font.draw(&mut strip, &banner.text, x, y, font_size, banner.text_color);

    imageops::replace(canvas, &strip, 0, y0 as i64);
}

/// Stacks the top banner, the QR canvas, the bottom banner and the caption
/// vertically. Empty texts add no band; with no bands the canvas is returned as is.
pub fn composite_banners(qr: RgbImage, params: &StyleParameters, font: &ResolvedFont) -> RgbImage {
    let (qr_w, qr_h) = qr.dimensions();
    let top_h = band_height(banner_text(&params.top), qr_w, TOP_BAND_PERCENT);
    let bottom_h = band_height(banner_text(&params.bottom), qr_w, BOTTOM_BAND_PERCENT);
    let caption_h = band_height(params.caption.as_deref(), qr_w, CAPTION_BAND_PERCENT);
    if top_h + bottom_h + caption_h == 0 {
        return qr;
    }

    let mut canvas =
        RgbImage::from_pixel(qr_w, top_h + qr_h + bottom_h + caption_h, params.background);

    if let Some(b) = params.top.as_ref().filter(|_| top_h > 0) {
        draw_band(&mut canvas, font, 0, top_h, b, params.font_size);
    }

    imageops::replace(&mut canvas, &qr, 0, top_h as i64);

    let by0 = top_h + qr_h;
    if let Some(b) = params.bottom.as_ref().filter(|_| bottom_h > 0) {
        draw_band(&mut canvas, font, by0, bottom_h, b, params.font_size);
    }

    if let Some(caption) = params.caption.as_ref().filter(|_| caption_h > 0) {
        let band = Banner {
            text: caption.clone(),
            band: params.background,
            text_color: params.primary,
        };
        draw_band(&mut canvas, font, by0 + bottom_h, caption_h, &band, params.font_size);
    }

    canvas
}

#[cfg(test)]
mod banner_tests {
    use image::{GenericImageView, Rgb, RgbImage};

    use super::composite_banners;
    use crate::builder::StyleBuilder;
    use crate::render::font::ResolvedFont;

    fn qr_canvas(w: u32) -> RgbImage {
        RgbImage::from_fn(w, w, |x, y| if (x + y) % 2 == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) })
    }

    #[test]
    fn test_no_text_is_identity() {
        let params = StyleBuilder::new()
            .top_banner("", "#5C2D91", "#FFFFFF")
            .bottom_banner("", "#5C2D91", "#FFFFFF")
            .caption("")
            .build()
            .unwrap();
        let qr = qr_canvas(100);
        let out = composite_banners(qr.clone(), &params, &ResolvedFont::Bitmap);
        assert_eq!(out, qr);
    }

    #[test]
    fn test_band_heights_and_qr_placement() {
        let params = StyleBuilder::new()
            .top_banner("Ship With Us", "#5C2D91", "#FFFFFF")
            .bottom_banner("Scan to visit our site", "#5C2D91", "#FFFFFF")
            .font_size(16)
            .build()
            .unwrap();
        let qr = qr_canvas(500);
        let out = composite_banners(qr.clone(), &params, &ResolvedFont::Bitmap);

        assert_eq!(out.dimensions(), (500, 100 + 500 + 110));
        assert_eq!(out.view(0, 100, 500, 500).to_image(), qr);
        assert_eq!(*out.get_pixel(0, 0), Rgb([0x5C, 0x2D, 0x91]));
        assert_eq!(*out.get_pixel(0, 99), Rgb([0x5C, 0x2D, 0x91]));
        assert_eq!(*out.get_pixel(0, 600), Rgb([0x5C, 0x2D, 0x91]));
        assert_eq!(*out.get_pixel(499, 709), Rgb([0x5C, 0x2D, 0x91]));
    }

    #[test]
    fn test_text_is_centred() {
        let params = StyleBuilder::new()
            .top_banner("I", "#000000", "#FFFFFF")
            .font_size(8)
            .build()
            .unwrap();
        let out = composite_banners(qr_canvas(100), &params, &ResolvedFont::Bitmap);
        // 'I' is 5 px wide at scale 1: x = (100 - 5) / 2 = 47, stem at column 2
        // Band is 20 px high: y = (20 - 8) / 2 = 6
        assert_eq!(*out.get_pixel(49, 6), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(49, 12), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(49, 5), Rgb([0, 0, 0]));
        assert_eq!(*out.get_pixel(44, 9), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_caption_only() {
        let params = StyleBuilder::new().caption("Scan me").font_size(8).build().unwrap();
        let qr = qr_canvas(200);
        let out = composite_banners(qr.clone(), &params, &ResolvedFont::Bitmap);
        assert_eq!(out.dimensions(), (200, 230));
        assert_eq!(out.view(0, 0, 200, 200).to_image(), qr);
        assert_eq!(*out.get_pixel(0, 229), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_bottom_only_keeps_qr_at_top() {
        let params = StyleBuilder::new()
            .top_banner("", "#5C2D91", "#FFFFFF")
            .bottom_banner("Scan", "#123456", "#FFFFFF")
            .font_size(8)
            .build()
            .unwrap();
        let qr = qr_canvas(100);
        let out = composite_banners(qr.clone(), &params, &ResolvedFont::Bitmap);
        assert_eq!(out.dimensions(), (100, 122));
        assert_eq!(out.view(0, 0, 100, 100).to_image(), qr);
        assert_eq!(*out.get_pixel(0, 121), Rgb([0x12, 0x34, 0x56]));
    }
}
