//! Feature sampling
//!
//! Each character occupies a 20x27 slot. Nine calibration points inside the
//! slot are tested against a brightness threshold; together they separate
//! all ten digit shapes.

use digitocr_core::{Bitmap24, Result};

use super::types::{FeatureVector, NUM_SAMPLES};

/// Width of one character slot in pixels
pub const CHAR_WIDTH: i32 = 20;

/// Number of characters in a captcha
pub const NUM_CHARS: usize = 5;

/// Default foreground threshold on the 0..=255 channel average
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Sample points `(x, y)` relative to the top-left of a character slot.
pub const SAMPLE_POINTS: [(i32, i32); NUM_SAMPLES] = [
    (10, 7),  // top center
    (7, 8),   // top left
    (12, 8),  // top right
    (10, 13), // center
    (7, 19),  // bottom left
    (12, 19), // bottom right
    (10, 20), // bottom center
    (6, 13),  // middle left
    (14, 13), // middle right
];

/// Sample one character slot whose left edge is at `origin_x`.
///
/// Bit `i` is 1 when the pixel at `origin_x + SAMPLE_POINTS[i]` averages
/// below `threshold`.
///
/// # Errors
///
/// Returns [`digitocr_core::Error::IndexOutOfBounds`] if a sample point
/// falls outside the image.
pub fn sample_features(bitmap: &Bitmap24, origin_x: i32, threshold: u8) -> Result<FeatureVector> {
    let mut bits = [0u8; NUM_SAMPLES];
    for (bit, &(px, py)) in bits.iter_mut().zip(SAMPLE_POINTS.iter()) {
        let x = origin_x as i64 + px as i64;
        *bit = bitmap.is_dark(x, py as i64, threshold)? as u8;
    }
    Ok(FeatureVector::from_bits(bits))
}
