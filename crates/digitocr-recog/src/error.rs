//! Error types for digitocr-recog

use digitocr_io::IoError;
use thiserror::Error;

/// Errors that can occur during recognition operations
///
/// Decoding problems arrive wrapped in [`RecogError::Io`]; the `is_*`
/// helpers classify them without matching on nested variants.
#[derive(Debug, Error)]
pub enum RecogError {
    /// The captcha could not be decoded
    #[error(transparent)]
    Io(#[from] IoError),

    /// Core library error (a sample point fell outside the image)
    #[error("core error: {0}")]
    Core(#[from] digitocr_core::Error),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RecogError {
    /// The input text was not valid Base64.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, RecogError::Io(IoError::InvalidEncoding(_)))
    }

    /// The decoded bytes were too short or not a BMP.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, RecogError::Io(IoError::InvalidFormat(_)))
    }

    /// The BMP was not 100x27.
    pub fn is_unexpected_geometry(&self) -> bool {
        matches!(self, RecogError::Io(IoError::UnexpectedGeometry { .. }))
    }
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
