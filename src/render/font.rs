use std::path::PathBuf;

use ab_glyph::{FontVec, PxScale};
use image::RgbImage;
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut, text_size},
    rect::Rect,
};

use crate::common::color::RgbColor;

/// Where to load a banner typeface from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// TrueType/OpenType data already in memory.
    Bytes(Vec<u8>),
    Path(PathBuf),
    /// The built-in 5x7 bitmap font. Always loads.
    Builtin,
}

impl FontSource {
    /// Conventional font locations, bold sans first, followed by the built-in font.
    pub fn system_candidates() -> Vec<FontSource> {
        vec![
            FontSource::Path("arial.ttf".into()),
            FontSource::Path("DejaVuSans-Bold.ttf".into()),
            FontSource::Path("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf".into()),
            FontSource::Builtin,
        ]
    }
}

pub enum ResolvedFont {
    Outline(FontVec),
    Bitmap,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline(_) => f.write_str("Outline"),
            Self::Bitmap => f.write_str("Bitmap"),
        }
    }
}

/// First source that loads wins. Never fails: sources that can't be read or
/// parsed are skipped and the bitmap font is the last resort.
pub fn resolve(sources: &[FontSource]) -> ResolvedFont {
    for src in sources {
        let loaded = match src {
            FontSource::Builtin => return ResolvedFont::Bitmap,
            FontSource::Bytes(data) => FontVec::try_from_vec(data.clone()).map_err(|e| e.to_string()),
            FontSource::Path(path) => std::fs::read(path)
                .map_err(|e| e.to_string())
                .and_then(|data| FontVec::try_from_vec(data).map_err(|e| e.to_string())),
        };
        match loaded {
            Ok(font) => return ResolvedFont::Outline(font),
            Err(e) => log::debug!("Skipping font {src:?}: {e}"),
        }
    }
    log::debug!("No font source loaded, using built-in bitmap font");
    ResolvedFont::Bitmap
}

impl ResolvedFont {
    /// Rendered width of `text` in pixels at `size` px.
    pub fn text_width(&self, text: &str, size: u32) -> u32 {
        match self {
            Self::Outline(font) => text_size(PxScale::from(size as f32), font, text).0,
            Self::Bitmap => bitmap::text_width(text, size),
        }
    }

    pub fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, size: u32, clr: RgbColor) {
        match self {
            Self::Outline(font) => {
                draw_text_mut(canvas, clr, x, y, PxScale::from(size as f32), font, text)
            }
            Self::Bitmap => bitmap::draw(canvas, text, x, y, size, clr),
        }
    }
}

// Built-in bitmap font
//------------------------------------------------------------------------------

mod bitmap {
    use super::*;

    const GLYPH_W: u32 = 5;
    const ADVANCE: u32 = GLYPH_W + 1;
    const CELL_H: u32 = 8;

    /// Printable ASCII 0x20..=0x7E. One byte per column, bit 0 is the top row.
    static GLYPHS: [[u8; 5]; 95] = [
        [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
        [0x00, 0x00, 0x5F, 0x00, 0x00], // !
        [0x00, 0x07, 0x00, 0x07, 0x00], // "
        [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
        [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
        [0x23, 0x13, 0x08, 0x64, 0x62], // %
        [0x36, 0x49, 0x55, 0x22, 0x50], // &
        [0x00, 0x05, 0x03, 0x00, 0x00], // '
        [0x00, 0x1C, 0x22, 0x41, 0x00], // (
        [0x00, 0x41, 0x22, 0x1C, 0x00], // )
        [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
        [0x08, 0x08, 0x3E, 0x08, 0x08], // +
        [0x00, 0x50, 0x30, 0x00, 0x00], // ,
        [0x08, 0x08, 0x08, 0x08, 0x08], // -
        [0x00, 0x60, 0x60, 0x00, 0x00], // .
        [0x20, 0x10, 0x08, 0x04, 0x02], // /
        [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
        [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
        [0x42, 0x61, 0x51, 0x49, 0x46], // 2
        [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
        [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
        [0x27, 0x45, 0x45, 0x45, 0x39], // 5
        [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
        [0x01, 0x71, 0x09, 0x05, 0x03], // 7
        [0x36, 0x49, 0x49, 0x49, 0x36], // 8
        [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
        [0x00, 0x36, 0x36, 0x00, 0x00], // :
        [0x00, 0x56, 0x36, 0x00, 0x00], // ;
        [0x08, 0x14, 0x22, 0x41, 0x00], // <
        [0x14, 0x14, 0x14, 0x14, 0x14], // =
        [0x00, 0x41, 0x22, 0x14, 0x08], // >
        [0x02, 0x01, 0x51, 0x09, 0x06], // ?
        [0x32, 0x49, 0x79, 0x41, 0x3E], // @
        [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
        [0x7F, 0x49, 0x49, 0x49, 0x36], // B
        [0x3E, 0x41, 0x41, 0x41, 0x22], // C
        [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
        [0x7F, 0x49, 0x49, 0x49, 0x41], // E
        [0x7F, 0x09, 0x09, 0x09, 0x01], // F
        [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
        [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
        [0x00, 0x41, 0x7F, 0x41, 0x00], // I
        [0x20, 0x40, 0x41, 0x3F, 0x01], // J
        [0x7F, 0x08, 0x14, 0x22, 0x41], // K
        [0x7F, 0x40, 0x40, 0x40, 0x40], // L
        [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
        [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
        [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
        [0x7F, 0x09, 0x09, 0x09, 0x06], // P
        [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
        [0x7F, 0x09, 0x19, 0x29, 0x46], // R
        [0x46, 0x49, 0x49, 0x49, 0x31], // S
        [0x01, 0x01, 0x7F, 0x01, 0x01], // T
        [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
        [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
        [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
        [0x63, 0x14, 0x08, 0x14, 0x63], // X
        [0x07, 0x08, 0x70, 0x08, 0x07], // Y
        [0x61, 0x51, 0x49, 0x45, 0x43], // Z
        [0x00, 0x7F, 0x41, 0x41, 0x00], // [
        [0x02, 0x04, 0x08, 0x10, 0x20], // \
        [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
        [0x04, 0x02, 0x01, 0x02, 0x04], // ^
        [0x40, 0x40, 0x40, 0x40, 0x40], // _
        [0x00, 0x01, 0x02, 0x04, 0x00], // `
        [0x20, 0x54, 0x54, 0x54, 0x78], // a
        [0x7F, 0x48, 0x44, 0x44, 0x38], // b
        [0x38, 0x44, 0x44, 0x44, 0x20], // c
        [0x38, 0x44, 0x44, 0x48, 0x7F], // d
        [0x38, 0x54, 0x54, 0x54, 0x18], // e
        [0x08, 0x7E, 0x09, 0x01, 0x02], // f
        [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
        [0x7F, 0x08, 0x04, 0x04, 0x78], // h
        [0x00, 0x44, 0x7D, 0x40, 0x00], // i
        [0x20, 0x40, 0x44, 0x3D, 0x00], // j
        [0x7F, 0x10, 0x28, 0x44, 0x00], // k
        [0x00, 0x41, 0x7F, 0x40, 0x00], // l
        [0x7C, 0x04, 0x18, 0x04, 0x78], // m
        [0x7C, 0x08, 0x04, 0x04, 0x78], // n
        [0x38, 0x44, 0x44, 0x44, 0x38], // o
        [0x7C, 0x14, 0x14, 0x14, 0x08], // p
        [0x08, 0x14, 0x14, 0x18, 0x7C], // q
        [0x7C, 0x08, 0x04, 0x04, 0x08], // r
        [0x48, 0x54, 0x54, 0x54, 0x20], // s
        [0x04, 0x3F, 0x44, 0x40, 0x20], // t
        [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
        [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
        [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
        [0x44, 0x28, 0x10, 0x28, 0x44], // x
        [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
        [0x44, 0x64, 0x54, 0x4C, 0x44], // z
        [0x00, 0x08, 0x36, 0x41, 0x00], // {
        [0x00, 0x00, 0x7F, 0x00, 0x00], // |
        [0x00, 0x41, 0x36, 0x08, 0x00], // }
        [0x02, 0x01, 0x02, 0x04, 0x02], // ~
    ];

    fn glyph(ch: char) -> &'static [u8; 5] {
        let idx = match ch {
            ' '..='~' => ch as usize - ' ' as usize,
            _ => '?' as usize - ' ' as usize,
        };
        &GLYPHS[idx]
    }

    /// Integer pixel scale so that an 8 px cell approximates `size`.
    fn scale(size: u32) -> u32 {
        (size / CELL_H).max(1)
    }

    pub fn text_width(text: &str, size: u32) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        (n * ADVANCE - 1) * scale(size)
    }

    pub fn draw(canvas: &mut RgbImage, text: &str, x: i32, y: i32, size: u32, clr: RgbColor) {
        let s = scale(size);
        for (i, ch) in text.chars().enumerate() {
            let gx = x + (i as u32 * ADVANCE * s) as i32;
            for (col, &bits) in glyph(ch).iter().enumerate() {
                for row in 0..CELL_H {
                    if (bits >> row) & 1 == 1 {
                        let px = gx + (col as u32 * s) as i32;
                        let py = y + (row * s) as i32;
                        draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(s, s), clr);
                    }
                }
            }
        }
    }

}
