//! digitocr-recog - Digit recognition for 5-digit captchas
//!
//! This crate reads the digits of a 100x27 captcha without a trained model:
//!
//! - **Feature sampling**: nine calibrated pixels per 20-pixel character slot
//!   are binarized against a brightness threshold
//! - **Template matching**: the 9-bit vector is matched to the nearest
//!   digit template by Hamming distance
//! - **Offset correction**: narrow `1` and wide `4` glyphs shift the rest of
//!   the line, so the sampling grid is re-aligned after each of them
//!
//! # Quick Start
//!
//! ```no_run
//! use digitocr_recog::recognize_base64;
//!
//! let text = std::fs::read_to_string("base64.txt").unwrap();
//! let digits = recognize_base64(&text).unwrap();
//! println!("Recognized digits: {}", digits);
//! ```
//!
//! # Modules
//!
//! - [`recog`]: sampling, matching and the per-character state machine

mod error;
pub mod recog;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use recog::{
    CharMatch, DigitRecognizer, FeatureVector, MatchResult, RecogOptions, RecognitionResult,
    recognize_base64,
};

// Re-export core for convenience
pub use digitocr_core;
