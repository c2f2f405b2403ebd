//! digitocr - Reader for 5-digit bitmap captchas
//!
//! Recognizes the numeric code in a 100x27 24-bit BMP captcha by template
//! matching nine calibrated sample points per character. No trained model
//! and no external OCR engine are involved.
//!
//! # Overview
//!
//! - Base64 and BMP decoding with eager validation ([`io`])
//! - Bounds-checked bitmap access ([`Bitmap24`])
//! - Feature sampling, template matching and offset correction ([`recog`])
//!
//! # Example
//!
//! ```no_run
//! use digitocr::recog::DigitRecognizer;
//!
//! let text = std::fs::read_to_string("base64.txt").unwrap();
//! let result = DigitRecognizer::from_base64(&text).unwrap().recognize().unwrap();
//! println!("Recognized digits: {}", result);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use digitocr_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use digitocr_io as io;
pub use digitocr_recog as recog;
