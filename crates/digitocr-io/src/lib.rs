//! digitocr-io - Captcha image decoding
//!
//! Turns the Base64 text handed over by the page scraper into a validated
//! [`Bitmap24`](digitocr_core::Bitmap24):
//!
//! - [`encoding`]: Base64 decoding and encoding
//! - [`bmp`]: 24-bit BMP header validation, reading and writing
//!
//! All structural checks happen before any pixel is sampled, so a malformed
//! image is rejected as a whole.

pub mod bmp;
pub mod encoding;
mod error;

pub use bmp::{read_bmp, read_bmp_base64, write_bmp};
pub use encoding::{decode_base64, encode_base64};
pub use error::{IoError, IoResult};
