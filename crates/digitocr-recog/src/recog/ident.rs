//! Captcha identification
//!
//! Walks the five character slots left to right. The offset accumulator is
//! passed into and returned from [`recognize_char`], so each step of the
//! state machine can be driven on its own.

use digitocr_core::Bitmap24;
use digitocr_io::read_bmp_base64;

use super::sample::{CHAR_WIDTH, DEFAULT_THRESHOLD, NUM_CHARS, sample_features};
use super::template::match_digit;
use super::types::{CharMatch, RecognitionResult};
use crate::error::{RecogError, RecogResult};

/// Options for captcha recognition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecogOptions {
    /// Channel average below which a pixel is ink (default: 70)
    pub threshold: u8,
    /// Re-align the sampling grid after `1` and `4` (default: true)
    pub offset_correction: bool,
}

impl Default for RecogOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            offset_correction: true,
        }
    }
}

impl RecogOptions {
    /// Set the foreground threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable offset correction
    pub fn with_offset_correction(mut self, enabled: bool) -> Self {
        self.offset_correction = enabled;
        self
    }
}

/// Offset to use for the slot after one recognized as `digit`.
///
/// Ink following a narrow `1` sits one pixel left of the nominal grid, ink
/// following a `4` one pixel right.
pub fn next_offset(offset: i32, digit: char) -> i32 {
    match digit {
        '1' => offset + 1,
        '4' => offset - 1,
        _ => offset,
    }
}

/// Recognize slot `index` with the given accumulated `offset`.
///
/// Returns the slot's match and the offset for the next slot. With offset
/// correction disabled the offset is returned unchanged.
///
/// # Errors
///
/// - [`RecogError::InvalidParameter`] if `index` is not a valid slot
/// - [`RecogError::Core`] if a sample point falls outside the image
pub fn recognize_char(
    bitmap: &Bitmap24,
    index: usize,
    offset: i32,
    options: &RecogOptions,
) -> RecogResult<(CharMatch, i32)> {
    if index >= NUM_CHARS {
        return Err(RecogError::InvalidParameter(format!(
            "character index {} out of range 0..{}",
            index, NUM_CHARS
        )));
    }

    let char_x_offset = index as i32 * CHAR_WIDTH;
    let origin_x = char_x_offset - offset;
    let features = sample_features(bitmap, origin_x, options.threshold)?;
    let matched = match_digit(&features);

    let next = if options.offset_correction {
        next_offset(offset, matched.digit)
    } else {
        offset
    };

    tracing::debug!(
        index,
        origin_x,
        %features,
        digit = %matched.digit,
        distance = ?matched.distance,
        next_offset = next,
        "recognized character"
    );

    Ok((
        CharMatch {
            index,
            offset,
            origin_x,
            features,
            matched,
        },
        next,
    ))
}

/// Recognizer for one decoded captcha
///
/// Owns its bitmap for the duration of the pass. [`recognize`](Self::recognize)
/// takes `&self` and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct DigitRecognizer {
    bitmap: Bitmap24,
    options: RecogOptions,
}

impl DigitRecognizer {
    /// Create a recognizer over a decoded bitmap with default options.
    pub fn new(bitmap: Bitmap24) -> Self {
        Self {
            bitmap,
            options: RecogOptions::default(),
        }
    }

    /// Decode and validate Base64 BMP text.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Io`] for invalid Base64, a malformed BMP or an
    /// unexpected geometry. Nothing is sampled in that case.
    pub fn from_base64(text: &str) -> RecogResult<Self> {
        Ok(Self::new(read_bmp_base64(text)?))
    }

    /// Replace the recognition options.
    pub fn with_options(mut self, options: RecogOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &RecogOptions {
        &self.options
    }

    /// The decoded bitmap.
    pub fn bitmap(&self) -> &Bitmap24 {
        &self.bitmap
    }

    /// Recognize all five characters.
    ///
    /// A misread character is never revisited; its effect on the offset
    /// carries into the following slots.
    pub fn recognize(&self) -> RecogResult<RecognitionResult> {
        let mut offset = 0;
        let mut chars = Vec::with_capacity(NUM_CHARS);

        for index in 0..NUM_CHARS {
            let (ch, next) = recognize_char(&self.bitmap, index, offset, &self.options)?;
            chars.push(ch);
            offset = next;
        }

        Ok(RecognitionResult::new(chars))
    }
}

/// Recognize the digits of a Base64 BMP captcha in one shot.
pub fn recognize_base64(text: &str) -> RecogResult<String> {
    Ok(DigitRecognizer::from_base64(text)?.recognize()?.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recog::{DIGIT_TEMPLATES, FeatureVector, SAMPLE_POINTS};
    use digitocr_core::{Bgr, CAPTCHA_GEOMETRY};

    fn background() -> Bitmap24 {
        Bitmap24::new_filled(CAPTCHA_GEOMETRY, Bgr::gray(200)).unwrap()
    }

    fn paint(bm: &mut Bitmap24, origin_x: i32, template: &FeatureVector) {
        for (i, &(px, py)) in SAMPLE_POINTS.iter().enumerate() {
            if template.is_set(i) {
                bm.set_pixel((origin_x + px) as i64, py as i64, Bgr::gray(20))
                    .unwrap();
            }
        }
    }

    #[test]
    fn test_next_offset() {
        assert_eq!(next_offset(0, '1'), 1);
        assert_eq!(next_offset(0, '4'), -1);
        assert_eq!(next_offset(3, '1'), 4);
        assert_eq!(next_offset(-2, '4'), -3);
        for d in ['0', '2', '3', '5', '6', '7', '8', '9', '?'] {
            assert_eq!(next_offset(2, d), 2);
        }
    }

    #[test]
    fn test_step_origin_follows_offset() {
        let bm = background();
        let opts = RecogOptions::default();
        let (ch, _) = recognize_char(&bm, 1, 0, &opts).unwrap();
        assert_eq!(ch.origin_x, 20);
        let (ch, _) = recognize_char(&bm, 1, 1, &opts).unwrap();
        assert_eq!(ch.origin_x, 19);
        let (ch, _) = recognize_char(&bm, 1, -1, &opts).unwrap();
        assert_eq!(ch.origin_x, 21);
    }

    #[test]
    fn test_step_returns_updated_offset() {
        let opts = RecogOptions::default();
        for (digit, template) in &DIGIT_TEMPLATES {
            let mut bm = background();
            paint(&mut bm, 40, template);
            let (ch, next) = recognize_char(&bm, 2, 0, &opts).unwrap();
            assert_eq!(ch.digit(), *digit);
            assert_eq!(next, next_offset(0, *digit));
        }
    }

    #[test]
    fn test_step_without_correction_keeps_offset() {
        let opts = RecogOptions::default().with_offset_correction(false);
        let mut bm = background();
        paint(&mut bm, 0, &DIGIT_TEMPLATES[1].1);
        let (ch, next) = recognize_char(&bm, 0, 0, &opts).unwrap();
        assert_eq!(ch.digit(), '1');
        assert_eq!(next, 0);
    }

    #[test]
    fn test_step_rejects_bad_index() {
        let bm = background();
        let err = recognize_char(&bm, 5, 0, &RecogOptions::default()).unwrap_err();
        assert!(matches!(err, RecogError::InvalidParameter(_)));
    }

    #[test]
    fn test_step_reports_out_of_bounds() {
        let bm = background();
        // slot 4 with offset -6 samples column 80 + 14 + 6 = 100
        let err = recognize_char(&bm, 4, -6, &RecogOptions::default()).unwrap_err();
        assert!(matches!(err, RecogError::Core(_)));
    }

    #[test]
    fn test_blank_image_reads_all_ones() {
        let result = DigitRecognizer::new(background()).recognize().unwrap();
        assert_eq!(result.text(), "11111");
        let offsets: Vec<i32> = result.chars().iter().map(|c| c.offset).collect();
        assert_eq!(offsets, [0, 1, 2, 3, 4]);
        assert!(!result.is_confident());
    }

    #[test]
    fn test_threshold_option() {
        let mut bm = background();
        paint(&mut bm, 0, &DIGIT_TEMPLATES[8].1);
        let rec = DigitRecognizer::new(bm);
        assert_eq!(rec.recognize().unwrap().chars()[0].digit(), '8');

        // ink at 20 is no longer below a threshold of 10
        let rec = rec.with_options(RecogOptions::default().with_threshold(10));
        assert_eq!(rec.recognize().unwrap().chars()[0].digit(), '1');
    }
}
