//! Synthetic captcha rendering
//!
//! Paints the ink pixels of each digit template at its calibration points,
//! which is the least a real glyph must cover to be read as that digit.
//! Per-slot horizontal shifts reproduce the drift real captchas show after
//! narrow and wide glyphs.

use crate::error::{TestError, TestResult};
use digitocr_core::{Bgr, Bitmap24, CAPTCHA_GEOMETRY};
use digitocr_io::{encode_base64, write_bmp};
use digitocr_recog::recog::{CHAR_WIDTH, NUM_CHARS, SAMPLE_POINTS, next_offset, template_for};

/// Digit ink (average 40, below the default threshold)
pub const INK: Bgr = Bgr::new(38, 40, 42);

/// Background (average 215)
pub const PAPER: Bgr = Bgr::gray(215);

/// Render `digits` on the nominal 20-pixel grid.
pub fn render_captcha(digits: &str) -> TestResult<Bitmap24> {
    render_shifted(digits, &[0; NUM_CHARS])
}

/// Render `digits` with slot `i` moved `shifts[i]` pixels right.
pub fn render_shifted(digits: &str, shifts: &[i32]) -> TestResult<Bitmap24> {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() != NUM_CHARS {
        return Err(TestError::LengthMismatch {
            expected: NUM_CHARS,
            actual: chars.len(),
        });
    }
    if shifts.len() != NUM_CHARS {
        return Err(TestError::LengthMismatch {
            expected: NUM_CHARS,
            actual: shifts.len(),
        });
    }

    let mut bitmap = Bitmap24::new_filled(CAPTCHA_GEOMETRY, PAPER)?;
    for (i, (&c, &shift)) in chars.iter().zip(shifts).enumerate() {
        let template = template_for(c).ok_or(TestError::NoTemplate(c))?;
        let origin_x = i as i32 * CHAR_WIDTH + shift;
        for (bit, &(px, py)) in SAMPLE_POINTS.iter().enumerate() {
            if template.is_set(bit) {
                bitmap.set_pixel((origin_x + px) as i64, py as i64, INK)?;
            }
        }
    }
    Ok(bitmap)
}

/// Horizontal shifts a real captcha shows for `digits`.
///
/// Everything after a `1` moves one pixel left, everything after a `4`
/// one pixel right, cumulatively.
pub fn drift_shifts(digits: &str) -> Vec<i32> {
    let mut offset = 0;
    digits
        .chars()
        .map(|c| {
            let shift = -offset;
            offset = next_offset(offset, c);
            shift
        })
        .collect()
}

/// Render `digits` with realistic drift after `1` and `4`.
pub fn render_drifting(digits: &str) -> TestResult<Bitmap24> {
    render_shifted(digits, &drift_shifts(digits))
}

/// Encode a bitmap as Base64 BMP text.
pub fn to_base64(bitmap: &Bitmap24) -> String {
    encode_base64(&write_bmp(bitmap))
}

/// Base64 BMP text of `digits` laid out like a real captcha.
pub fn captcha_base64(digits: &str) -> TestResult<String> {
    Ok(to_base64(&render_drifting(digits)?))
}
