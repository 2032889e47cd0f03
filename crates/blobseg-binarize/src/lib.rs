//! blobseg-binarize - Grayscale to binary conversion
//!
//! This crate reduces floating-point grayscale grids to the binary
//! foreground/background grids consumed by the labeling engine:
//!
//! - **Fixed-threshold binarization** - a sample is foreground iff it is
//!   strictly greater than the threshold
//! - **Per-channel binarization** - independent thresholding of multiple
//!   channels with the same rule
//! - **Inversion** - `1.0 - v` pre-pass for dark-on-light subjects
//!
//! # Examples
//!
//! ```
//! use blobseg_binarize::threshold_to_binary;
//! use blobseg_core::FGrid;
//!
//! let gray = FGrid::from_data(3, 1, vec![0.1, 0.6, 0.9]).unwrap();
//! let binary = threshold_to_binary(&gray, 0.5).unwrap();
//! assert_eq!(binary.count_foreground(), 2);
//! ```

pub mod error;
pub mod invert;
pub mod threshold;

// Re-export error types
pub use error::{BinarizeError, BinarizeResult};

// Re-export operations
pub use invert::invert;
pub use threshold::{threshold_channels, threshold_to_binary};
