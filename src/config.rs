//! Defaults and ranges of the generator form, plus a flat record that a
//! presentation layer can fill in (or deserialize with the `serde` feature) and
//! turn into [`StyleParameters`].

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::builder::{DotShape, FillMode, StyleBuilder, StyleParameters};
use crate::common::{error::QRResult, matrix::ECLevel};
use crate::render::font::FontSource;

pub const DEFAULT_TARGET_SIZE: u32 = 1000;
pub const TARGET_SIZE_RANGE: RangeInclusive<u32> = 600..=1400;
pub const TARGET_SIZE_STEP: u32 = 100;

pub const DEFAULT_QUIET_ZONE: usize = 4;
pub const QUIET_ZONE_RANGE: RangeInclusive<usize> = 4..=8;

pub const DEFAULT_FONT_SIZE: u32 = 44;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 28..=64;
pub const FONT_SIZE_STEP: u32 = 2;

pub const DEFAULT_DOT_A: &str = "#4B1AA3";
pub const DEFAULT_DOT_B: &str = "#F77618";
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_BANNER_BAND: &str = "#5C2D91";
pub const DEFAULT_BANNER_TEXT: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct StyleConfig {
    pub dot_a: String,
    pub dot_b: String,
    pub background: String,
    pub size_px: u32,
    pub quiet_zone: usize,
    pub ec_level: ECLevel,
    pub two_tone: bool,
    pub gradient: bool,
    pub rounded: bool,
    pub top_text: String,
    pub top_band: String,
    pub top_text_color: String,
    pub bottom_text: String,
    pub bottom_band: String,
    pub bottom_text_color: String,
    pub caption: String,
    pub font_size: u32,
    /// Font files tried in order before the built-in font.
    pub font_paths: Vec<PathBuf>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dot_a: DEFAULT_DOT_A.into(),
            dot_b: DEFAULT_DOT_B.into(),
            background: DEFAULT_BACKGROUND.into(),
            size_px: DEFAULT_TARGET_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            ec_level: ECLevel::H,
            two_tone: true,
            gradient: false,
            rounded: false,
            top_text: "Ship With Us".into(),
            top_band: DEFAULT_BANNER_BAND.into(),
            top_text_color: DEFAULT_BANNER_TEXT.into(),
            bottom_text: "Scan to visit our site".into(),
            bottom_band: DEFAULT_BANNER_BAND.into(),
            bottom_text_color: DEFAULT_BANNER_TEXT.into(),
            caption: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_paths: Vec::new(),
        }
    }
}

impl StyleConfig {
    /// Out-of-range sizes are clamped to the form's ranges.
    pub fn to_builder(&self) -> StyleBuilder {
        let fill = match (self.gradient, self.two_tone) {
            (true, _) => FillMode::Gradient,
            (false, true) => FillMode::TwoTone,
            (false, false) => FillMode::Solid,
        };
        let shape = if self.rounded { DotShape::Rounded } else { DotShape::Square };
        let mut fonts: Vec<FontSource> =
            self.font_paths.iter().cloned().map(FontSource::Path).collect();
        fonts.push(FontSource::Builtin);

        let mut builder = StyleBuilder::new();
        builder
            .primary(&self.dot_a)
            .secondary(&self.dot_b)
            .background(&self.background)
            .target_size(clamp_to(self.size_px, &TARGET_SIZE_RANGE))
            .quiet_zone(clamp_to(self.quiet_zone, &QUIET_ZONE_RANGE))
            .ec_level(self.ec_level)
            .fill(fill)
            .shape(shape)
            .top_banner(&self.top_text, &self.top_band, &self.top_text_color)
            .bottom_banner(&self.bottom_text, &self.bottom_band, &self.bottom_text_color)
            .caption(&self.caption)
            .font_size(clamp_to(self.font_size, &FONT_SIZE_RANGE))
            .fonts(fonts);
        builder
    }

    pub fn to_params(&self) -> QRResult<StyleParameters> {
        self.to_builder().build()
    }
}

fn clamp_to<T: Ord + Copy>(v: T, range: &RangeInclusive<T>) -> T {
    v.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod config_tests {
    use image::Rgb;

    use super::StyleConfig;
    use crate::builder::FillMode;
    use crate::common::error::QRError;
    use crate::render::font::FontSource;

    #[test]
    fn test_default_matches_form() {
        let params = StyleConfig::default().to_params().unwrap();
        assert_eq!(params.primary, Rgb([0x4B, 0x1A, 0xA3]));
        assert_eq!(params.secondary, Some(Rgb([0xF7, 0x76, 0x18])));
        assert_eq!(params.fill, FillMode::TwoTone);
        assert_eq!(params.target_size, 1000);
        assert_eq!(params.font_size, 44);
        assert_eq!(params.top.as_ref().unwrap().text, "Ship With Us");
        assert_eq!(params.fonts, vec![FontSource::Builtin]);
    }

    #[test]
    fn test_ranges_clamped() {
        let cfg = StyleConfig { size_px: 50, quiet_zone: 20, font_size: 100, ..Default::default() };
        let params = cfg.to_params().unwrap();
        assert_eq!(params.target_size, 600);
        assert_eq!(params.quiet_zone, 8);
        assert_eq!(params.font_size, 64);
    }

    #[test]
    fn test_gradient_wins_over_two_tone() {
        let cfg = StyleConfig { gradient: true, ..Default::default() };
        assert_eq!(cfg.to_params().unwrap().fill, FillMode::Gradient);
    }

    #[test]
    fn test_bad_color() {
        let cfg = StyleConfig { top_band: "#5C2D9".into(), ..Default::default() };
        assert_eq!(cfg.to_params().unwrap_err(), QRError::InvalidColorFormat("#5C2D9".into()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_json() {
        let cfg: StyleConfig =
            serde_json::from_str(r##"{ "dot_a": "#000000", "two_tone": false, "ec_level": "Q" }"##)
                .unwrap();
        let params = cfg.to_params().unwrap();
        assert_eq!(params.primary, Rgb([0, 0, 0]));
        assert_eq!(params.fill, FillMode::Solid);
        assert_eq!(params.ec_level, crate::ECLevel::Q);
        assert_eq!(params.quiet_zone, 4);
    }
}
