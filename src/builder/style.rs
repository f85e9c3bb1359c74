use std::borrow::Cow;

use image::DynamicImage;

use crate::common::{color::RgbColor, error::QRResult, matrix::ECLevel};
use crate::render::font::FontSource;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    #[default]
    Solid,
    /// Even module rows take the primary color, odd rows the secondary.
    TwoTone,
    /// Vertical blend from the primary color towards the background, dark modules only.
    Gradient,
}

/// `Rounded` is a uniform darkening of dot pixels, not geometric rounding.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DotShape {
    #[default]
    Square,
    Rounded,
}

/// A colored text band above or below the symbol.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Banner {
    pub text: String,
    pub band: RgbColor,
    pub text_color: RgbColor,
}

impl Banner {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Logo {
    Image(DynamicImage),
    /// Encoded image bytes (PNG, JPEG, ...), decoded at generation time.
    Encoded(Vec<u8>),
}

impl Logo {
    pub fn decode(&self) -> QRResult<Cow<'_, DynamicImage>> {
        match self {
            Self::Image(img) => Ok(Cow::Borrowed(img)),
            Self::Encoded(bytes) => Ok(Cow::Owned(image::load_from_memory(bytes)?)),
        }
    }
}

/// Everything the pipeline needs besides the text. Built once per generation with
/// [`StyleBuilder`](super::StyleBuilder) and only read afterwards.
#[derive(Debug, Clone)]
pub struct StyleParameters {
    pub primary: RgbColor,
    pub secondary: Option<RgbColor>,
    pub background: RgbColor,
    /// Target side of the symbol canvas in pixels. Module size is this divided by
    /// the matrix width, floored.
    pub target_size: u32,
    pub quiet_zone: usize,
    pub ec_level: ECLevel,
    pub shape: DotShape,
    pub fill: FillMode,
    pub logo: Option<Logo>,
    pub top: Option<Banner>,
    pub bottom: Option<Banner>,
    pub caption: Option<String>,
    pub font_size: u32,
    /// Tried in order; the built-in bitmap font is the implicit last resort.
    pub fonts: Vec<FontSource>,
}

impl StyleParameters {
    /// Color of dark modules in row `r`, before gradient or shape adjustments.
    pub fn row_color(&self, r: usize) -> RgbColor {
        match (self.fill, self.secondary) {
            (FillMode::TwoTone, Some(secondary)) if r & 1 == 1 => secondary,
            _ => self.primary,
        }
    }

    pub fn has_text(&self) -> bool {
        let banner = |b: &Option<Banner>| b.as_ref().is_some_and(|b| !b.is_empty());
        banner(&self.top)
            || banner(&self.bottom)
            || self.caption.as_ref().is_some_and(|c| !c.is_empty())
    }
}
