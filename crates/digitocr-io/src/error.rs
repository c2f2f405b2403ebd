//! I/O error types
//!
//! Every decoding failure is mapped into one `IoError` so callers of the
//! recognizer only need to handle one type.

use digitocr_core::ImageGeometry;
use thiserror::Error;

/// Error type for captcha image decoding.
#[derive(Error, Debug)]
pub enum IoError {
    /// The input text is not valid Base64
    #[error("invalid Base64 string: {0}")]
    InvalidEncoding(String),

    /// The decoded bytes are not a usable BMP
    #[error("data is not a valid BMP: {0}")]
    InvalidFormat(String),

    /// The BMP declares a size other than the supported one
    #[error("expected image dimensions {expected}, but got {actual_width}x{actual_height}")]
    UnexpectedGeometry {
        expected: ImageGeometry,
        actual_width: i32,
        actual_height: i32,
    },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] digitocr_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
