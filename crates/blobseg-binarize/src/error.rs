//! Error types for blobseg-binarize

use thiserror::Error;

/// Errors that can occur during binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobseg_core::Error),

    /// Threshold is not a finite number
    #[error("invalid threshold: {0}")]
    InvalidThreshold(f32),

    /// Channels passed together must share dimensions
    #[error("channel dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ChannelDimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for binarization operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
