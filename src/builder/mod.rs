mod style;

pub use style::{Banner, DotShape, FillMode, Logo, StyleParameters};

use image::{DynamicImage, RgbImage};

use crate::common::{
    color::{contrast_ratio, hex_to_rgb, RgbColor, MIN_SCAN_CONTRAST},
    error::{ContrastSubject, QRResult, Warning},
    matrix::{ECLevel, ModuleMatrix},
};
use crate::config::{DEFAULT_FONT_SIZE, DEFAULT_QUIET_ZONE, DEFAULT_TARGET_SIZE};
use crate::render::{self, font::FontSource};

// Builder
//------------------------------------------------------------------------------

struct BannerSpec {
    text: String,
    band: String,
    text_color: String,
}

/// Collects styling options as the presentation layer hands them over. Colors stay
/// as hex strings until [`build`](Self::build) validates them.
pub struct StyleBuilder {
    primary: String,
    secondary: Option<String>,
    background: String,
    target_size: u32,
    quiet_zone: usize,
    ec_level: ECLevel,
    shape: DotShape,
    fill: FillMode,
    logo: Option<Logo>,
    top: Option<BannerSpec>,
    bottom: Option<BannerSpec>,
    caption: Option<String>,
    font_size: u32,
    fonts: Vec<FontSource>,
}

impl Default for StyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self {
            primary: "#000000".into(),
            secondary: None,
            background: "#FFFFFF".into(),
            target_size: DEFAULT_TARGET_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            ec_level: ECLevel::H,
            shape: DotShape::Square,
            fill: FillMode::Solid,
            logo: None,
            top: None,
            bottom: None,
            caption: None,
            font_size: DEFAULT_FONT_SIZE,
            fonts: vec![FontSource::Builtin],
        }
    }

    pub fn primary(&mut self, hex: &str) -> &mut Self {
        self.primary = hex.to_string();
        self
    }

    pub fn secondary(&mut self, hex: &str) -> &mut Self {
        self.secondary = Some(hex.to_string());
        self
    }

    pub fn background(&mut self, hex: &str) -> &mut Self {
        self.background = hex.to_string();
        self
    }

    pub fn target_size(&mut self, px: u32) -> &mut Self {
        self.target_size = px;
        self
    }

    pub fn quiet_zone(&mut self, modules: usize) -> &mut Self {
        self.quiet_zone = modules;
        self
    }

    pub fn ec_level(&mut self, ecl: ECLevel) -> &mut Self {
        self.ec_level = ecl;
        self
    }

    pub fn shape(&mut self, shape: DotShape) -> &mut Self {
        self.shape = shape;
        self
    }

    pub fn fill(&mut self, fill: FillMode) -> &mut Self {
        self.fill = fill;
        self
    }

    pub fn logo(&mut self, img: DynamicImage) -> &mut Self {
        self.logo = Some(Logo::Image(img));
        self
    }

    pub fn logo_bytes(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.logo = Some(Logo::Encoded(bytes));
        self
    }

    pub fn top_banner(&mut self, text: &str, band: &str, text_color: &str) -> &mut Self {
        self.top = Some(BannerSpec {
            text: text.to_string(),
            band: band.to_string(),
            text_color: text_color.to_string(),
        });
        self
    }

    pub fn bottom_banner(&mut self, text: &str, band: &str, text_color: &str) -> &mut Self {
        self.bottom = Some(BannerSpec {
            text: text.to_string(),
            band: band.to_string(),
            text_color: text_color.to_string(),
        });
        self
    }

    pub fn caption(&mut self, text: &str) -> &mut Self {
        self.caption = Some(text.to_string());
        self
    }

    pub fn font_size(&mut self, px: u32) -> &mut Self {
        self.font_size = px;
        self
    }

    /// Replaces the font fallback list.
    pub fn fonts(&mut self, fonts: Vec<FontSource>) -> &mut Self {
        self.fonts = fonts;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}, Quiet zone: {}, Ec level: {:?}, Fill: {:?}, Shape: {:?} }}",
            self.target_size, self.quiet_zone, self.ec_level, self.fill, self.shape
        )
    }

    pub fn build(&self) -> QRResult<StyleParameters> {
        let banner = |spec: &Option<BannerSpec>| -> QRResult<Option<Banner>> {
            spec.as_ref()
                .map(|b| -> QRResult<Banner> {
                    Ok(Banner {
                        text: b.text.clone(),
                        band: hex_to_rgb(&b.band)?,
                        text_color: hex_to_rgb(&b.text_color)?,
                    })
                })
                .transpose()
        };

        Ok(StyleParameters {
            primary: hex_to_rgb(&self.primary)?,
            secondary: self.secondary.as_deref().map(hex_to_rgb).transpose()?,
            background: hex_to_rgb(&self.background)?,
            target_size: self.target_size,
            quiet_zone: self.quiet_zone,
            ec_level: self.ec_level,
            shape: self.shape,
            fill: self.fill,
            logo: self.logo.clone(),
            top: banner(&self.top)?,
            bottom: banner(&self.bottom)?,
            caption: self.caption.clone(),
            font_size: self.font_size,
            fonts: self.fonts.clone(),
        })
    }
}


// Contrast advisory
//------------------------------------------------------------------------------

/// Foreground/background pairs that fall below the scanning contrast minimum.
/// Never blocks generation.
pub fn check_contrast(params: &StyleParameters) -> Vec<Warning> {
    let mut pairs: Vec<(ContrastSubject, RgbColor, RgbColor)> =
        vec![(ContrastSubject::Primary, params.primary, params.background)];
    if let (FillMode::TwoTone, Some(secondary)) = (params.fill, params.secondary) {
        pairs.push((ContrastSubject::Secondary, secondary, params.background));
    }
    for (subject, banner) in
        [(ContrastSubject::TopBanner, &params.top), (ContrastSubject::BottomBanner, &params.bottom)]
    {
        if let Some(b) = banner.as_ref().filter(|b| !b.is_empty()) {
            pairs.push((subject, b.text_color, b.band));
        }
    }
    if params.caption.as_ref().is_some_and(|c| !c.is_empty()) {
        pairs.push((ContrastSubject::Caption, params.primary, params.background));
    }

    pairs
        .into_iter()
        .filter_map(|(subject, fg, bg)| {
            let ratio = contrast_ratio(fg, bg);
            (ratio < MIN_SCAN_CONTRAST).then_some(Warning::LowContrast { subject, ratio })
        })
        .collect()
}

// Generation
//------------------------------------------------------------------------------

/// Output of one generation request.
#[derive(Debug, Clone)]
pub struct Generated {
    pub image: RgbImage,
    pub png: Vec<u8>,
    /// `None` when vector export is unavailable; a matching warning is recorded.
    pub svg: Option<String>,
    pub warnings: Vec<Warning>,
    pub module_px: u32,
    pub matrix: ModuleMatrix,
}

/// Encodes `text` and renders it with `params`.
pub fn generate(text: &str, params: &StyleParameters) -> QRResult<Generated> {
    log::debug!("Encoding data...");
    let matrix = ModuleMatrix::encode(text, params.ec_level, params.quiet_zone)?;
    generate_from_matrix(matrix, params)
}

/// Renders a matrix produced by an external encoder.
pub fn generate_from_matrix(matrix: ModuleMatrix, params: &StyleParameters) -> QRResult<Generated> {
    let mut warnings = check_contrast(params);
    for w in &warnings {
        log::warn!("{w}");
    }

    let module_px = render::module_px(params.target_size, matrix.width())?;
    let logo = params.logo.as_ref().map(Logo::decode).transpose()?;

    log::debug!("Rasterizing {0}x{0} modules at {module_px}px...", matrix.width());
    let mut canvas = render::rasterize(&matrix, params, module_px);

    log::debug!("Reinforcing finder patterns...");
    render::finder::reinforce_finders(&mut canvas, &matrix, module_px, params.background);

    if let Some(logo) = logo {
        log::debug!("Compositing logo...");
        render::logo::composite_logo(&mut canvas, &logo, params.background);
    }

    if params.has_text() {
        log::debug!("Compositing banners...");
        let font = render::font::resolve(&params.fonts);
        canvas = render::banner::composite_banners(canvas, params, &font);
    }

    let png = render::encode_png(&canvas)?;

    let svg = if render::vector::vector_export_available() {
        Some(render::vector::export_svg(&matrix, params, module_px)?)
    } else {
        log::info!("Vector export unavailable, skipping SVG");
        warnings.push(Warning::VectorExportUnavailable);
        None
    };

    log::debug!("Generated {}x{} image", canvas.width(), canvas.height());
    Ok(Generated { image: canvas, png, svg, warnings, module_px, matrix })
}
