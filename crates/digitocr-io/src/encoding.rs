//! Base64 transport encoding
//!
//! Captcha images arrive as Base64 text, sometimes line-wrapped and
//! sometimes as a `data:` URL. Padding is accepted whether present or not.

use crate::{IoError, IoResult};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;

/// Standard alphabet, padding optional on decode.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode Base64 text into raw bytes.
///
/// ASCII whitespace anywhere in the input is ignored, and a leading
/// `data:<mime>;base64,` prefix is stripped.
///
/// # Errors
///
/// Returns [`IoError::InvalidEncoding`] if the text is empty or contains
/// characters outside the standard alphabet.
pub fn decode_base64(text: &str) -> IoResult<Vec<u8>> {
    let text = text.trim();
    let payload = match text.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| IoError::InvalidEncoding("data URL is not base64".to_string()))?,
        None => text,
    };

    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(IoError::InvalidEncoding("empty input".to_string()));
    }

    LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| IoError::InvalidEncoding(e.to_string()))
}

/// Encode raw bytes as padded standard Base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
