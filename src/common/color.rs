use image::Rgb;
use num_traits::{clamp, ToPrimitive};

use super::error::{QRError, QRResult};

pub type RgbColor = Rgb<u8>;

pub const BLACK: RgbColor = Rgb([0, 0, 0]);
#[cfg(test)]
pub const WHITE: RgbColor = Rgb([255, 255, 255]);

/// Below this ratio a foreground/background pair is unreliable for optical scanning.
pub const MIN_SCAN_CONTRAST: f64 = 3.0;

// Hex conversion
//------------------------------------------------------------------------------

/// Parses `#RRGGBB` or `RRGGBB`. Surrounding whitespace is ignored.
pub fn hex_to_rgb(hex: &str) -> QRResult<RgbColor> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QRError::InvalidColorFormat(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| QRError::InvalidColorFormat(hex.to_string()))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

pub fn rgb_to_hex(rgb: RgbColor) -> String {
    let Rgb([r, g, b]) = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}

// WCAG contrast
//------------------------------------------------------------------------------

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(rgb: RgbColor) -> f64 {
    let Rgb([r, g, b]) = rgb;
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

// Channel arithmetic
//------------------------------------------------------------------------------

fn to_channel(v: f64) -> u8 {
    clamp(v.round(), 0.0, 255.0).to_u8().unwrap_or(u8::MAX)
}

/// Linear blend from `from` (t = 0) to `to` (t = 1), per channel.
pub fn lerp(from: RgbColor, to: RgbColor, t: f64) -> RgbColor {
    let t = clamp(t, 0.0, 1.0);
    let mut out = [0u8; 3];
    for (i, o) in out.iter_mut().enumerate() {
        let (a, b) = (from[i] as f64, to[i] as f64);
        *o = to_channel(a + (b - a) * t);
    }
    Rgb(out)
}

pub fn darken(rgb: RgbColor, factor: f64) -> RgbColor {
    let Rgb([r, g, b]) = rgb;
    Rgb([r, g, b].map(|c| to_channel(c as f64 * factor)))
}
