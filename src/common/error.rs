use std::fmt::{Display, Formatter};

use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    // Input
    #[error("Empty data")]
    EmptyData,
    #[error("Data too long")]
    DataTooLong,
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("Invalid module matrix: {0}")]
    InvalidMatrix(String),

    // Rendering
    #[error("Module size is zero: target {target}px is smaller than {modules} modules")]
    ModuleSizeTooSmall { target: u32, modules: usize },
    #[error("Vector export unavailable")]
    VectorExportUnavailable,
    #[error("Render failure: {0}")]
    RenderFailure(String),
}

impl From<image::ImageError> for QRError {
    fn from(err: image::ImageError) -> Self {
        Self::RenderFailure(err.to_string())
    }
}

impl From<qrcode::types::QrError> for QRError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::RenderFailure(other.to_string()),
        }
    }
}

pub type QRResult<T> = Result<T, QRError>;

// Advisory warnings
//------------------------------------------------------------------------------

/// Which foreground/background pair a contrast warning refers to.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ContrastSubject {
    Primary,
    Secondary,
    TopBanner,
    BottomBanner,
    Caption,
}

/// Conditions reported alongside a successful generation. None of these abort it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Warning {
    LowContrast { subject: ContrastSubject, ratio: f64 },
    VectorExportUnavailable,
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::LowContrast { subject, ratio } => write!(
                f,
                "Low contrast for {subject:?} ({ratio:.2}:1), consider darker dots or a lighter background"
            ),
            Self::VectorExportUnavailable => f.write_str("Vector export unavailable"),
        }
    }
}
