//! Error types for blobseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobseg_core::Error),

    /// Binarization error
    #[error("binarize error: {0}")]
    Binarize(#[from] blobseg_binarize::BinarizeError),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
