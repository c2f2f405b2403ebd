//! Type definitions for digit recognition

use std::fmt;

/// Number of calibrated sample points per character
pub const NUM_SAMPLES: usize = 9;

/// Character reported when no template could be compared
pub const UNKNOWN_CHAR: char = '?';

/// Binary features of one character slot, one bit per sample point.
///
/// Bit order follows [`SAMPLE_POINTS`](super::SAMPLE_POINTS); `1` marks
/// dark ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureVector([u8; NUM_SAMPLES]);

impl FeatureVector {
    /// Build a vector from 0/1 values. Any non-zero value counts as 1.
    pub const fn from_bits(bits: [u8; NUM_SAMPLES]) -> Self {
        let mut out = [0u8; NUM_SAMPLES];
        let mut i = 0;
        while i < NUM_SAMPLES {
            out[i] = (bits[i] != 0) as u8;
            i += 1;
        }
        Self(out)
    }

    /// The 0/1 values in sample-point order.
    pub fn bits(&self) -> &[u8; NUM_SAMPLES] {
        &self.0
    }

    /// Whether sample `i` is foreground.
    pub fn is_set(&self, i: usize) -> bool {
        self.0[i] != 0
    }

    /// Number of foreground samples.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|&b| b as u32).sum()
    }

    /// Number of positions at which the two vectors differ.
    pub fn hamming_distance(&self, other: &FeatureVector) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", b)?;
        }
        write!(f, "]")
    }
}

/// Best template for one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Matched digit, or [`UNKNOWN_CHAR`] if no template was compared
    pub digit: char,
    /// Hamming distance to the matched template (None for no match)
    pub distance: Option<u32>,
}

impl MatchResult {
    /// Result for an empty template table.
    pub const NO_MATCH: MatchResult = MatchResult {
        digit: UNKNOWN_CHAR,
        distance: None,
    };

    /// True for an exact template hit.
    pub fn is_exact(&self) -> bool {
        self.distance == Some(0)
    }
}

/// Recognition details for one character slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMatch {
    /// Slot index (0..5)
    pub index: usize,
    /// Offset in effect while this slot was sampled
    pub offset: i32,
    /// Horizontal origin actually sampled (`index * 20 - offset`)
    pub origin_x: i32,
    /// Sampled features
    pub features: FeatureVector,
    /// Template match for `features`
    pub matched: MatchResult,
}

impl CharMatch {
    /// Recognized character.
    pub fn digit(&self) -> char {
        self.matched.digit
    }
}

/// Outcome of one recognition pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    chars: Vec<CharMatch>,
}

impl RecognitionResult {
    pub(crate) fn new(chars: Vec<CharMatch>) -> Self {
        Self { chars }
    }

    /// The recognized characters in order.
    pub fn text(&self) -> String {
        self.chars.iter().map(CharMatch::digit).collect()
    }

    /// Per-slot details.
    pub fn chars(&self) -> &[CharMatch] {
        &self.chars
    }

    /// True if every slot matched its template exactly.
    pub fn is_confident(&self) -> bool {
        self.chars.iter().all(|c| c.matched.is_exact())
    }
}

impl fmt::Display for RecognitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
