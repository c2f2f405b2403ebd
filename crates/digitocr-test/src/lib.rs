//! digitocr-test - Regression test helpers for digitocr
//!
//! - [`RegParams`]: numbered value/string/bitmap comparisons that collect
//!   failures and report them together at [`RegParams::cleanup`]
//! - [`synth`]: renders captchas from the digit templates
//! - [`load_test_data`]: reads committed Base64 fixtures
//!
//! # Usage
//!
//! ```ignore
//! use digitocr_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("recog");
//! let text = synth::captcha_base64("01234").unwrap();
//! rp.compare_strings(b"01234", recognize_base64(&text).unwrap().as_bytes());
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Load a Base64 fixture from the test data directory
///
/// # Arguments
///
/// * `name` - Fixture filename (e.g., "captcha_01234.b64")
pub fn load_test_data(name: &str) -> TestResult<String> {
    let path = test_data_path(name);
    std::fs::read_to_string(&path).map_err(|e| TestError::DataLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // digitocr-test is at crates/digitocr-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}
