//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a fixture
    #[error("failed to load test data '{path}': {message}")]
    DataLoad { path: String, message: String },

    /// A synthetic captcha was requested for an unrenderable character
    #[error("cannot render '{0}': no digit template")]
    NoTemplate(char),

    /// A synthetic captcha needs exactly one shift per character
    #[error("expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Core library error while painting pixels
    #[error("core error: {0}")]
    Core(#[from] digitocr_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
