//! digitocr-core - Basic data structures for the captcha reader
//!
//! This crate provides the fundamental types shared by the decoder and the
//! recognizer:
//!
//! - [`Bitmap24`] - A bounds-checked view over 24-bit bottom-up pixel rows
//! - [`ImageGeometry`] - Width/height pair with 4-byte aligned row stride
//! - [`Bgr`] - One pixel as stored on disk (blue, green, red)
//!
//! Every captcha handled by this workspace has the single geometry
//! [`CAPTCHA_GEOMETRY`] (100x27).

pub mod bitmap;
pub mod error;

pub use bitmap::{Bgr, Bitmap24, CAPTCHA_GEOMETRY, ImageGeometry};
pub use error::{Error, Result};
