//! Character recognition module
//!
//! This module provides template-based digit recognition.
//!
//! # Overview
//!
//! The recognizer works by:
//! 1. Sampling nine fixed points inside each 20x27 character slot
//! 2. Matching the resulting 9-bit vector against the digit templates
//! 3. Carrying a horizontal offset from one slot to the next so that glyphs
//!    after a `1` or a `4` are sampled where their ink actually is
//!
//! # Example
//!
//! ```no_run
//! use digitocr_recog::recog::{DigitRecognizer, RecogOptions};
//!
//! # fn run(text: &str) -> digitocr_recog::RecogResult<()> {
//! let recognizer = DigitRecognizer::from_base64(text)?.with_options(RecogOptions::default());
//! let result = recognizer.recognize()?;
//! println!("{} (confident: {})", result.text(), result.is_confident());
//! # Ok(())
//! # }
//! ```

mod ident;
mod sample;
mod template;
mod types;

pub use ident::*;
pub use sample::*;
pub use template::*;
pub use types::*;
