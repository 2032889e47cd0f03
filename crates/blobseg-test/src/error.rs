//! Error types for blobseg-test

use thiserror::Error;

/// Errors that can occur in test support code
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobseg_core::Error),

    /// Malformed ASCII grid pattern
    #[error("invalid grid pattern: {0}")]
    InvalidPattern(String),

    /// I/O error while reading or writing golden files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test support operations
pub type TestResult<T> = Result<T, TestError>;
