//! Error types for digitocr-core
//!
//! Pixel access in this workspace is always derived arithmetically from
//! calibration tables and an accumulated offset, so a bad coordinate is
//! reported as a value rather than a panic.

use thiserror::Error;

/// digitocr-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Buffer cannot hold the pixel rows the geometry declares
    #[error("pixel buffer too short: need {needed} bytes, got {len}")]
    BufferTooShort { needed: usize, len: usize },

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
