//! Fixed-threshold binarization
//!
//! Converts grayscale sample grids to binary foreground/background grids
//! with a single elementwise rule: a sample is foreground iff it is
//! strictly greater than the threshold. Multi-channel inputs are handled
//! by binarizing each channel independently with the same rule.

use crate::error::{BinarizeError, BinarizeResult};
use blobseg_core::{BinGrid, FGrid};

/// Convert a grayscale grid to binary using a fixed threshold
///
/// Samples strictly greater than `threshold` become foreground; all
/// other samples (including those exactly equal to the threshold)
/// become background. The pass is pure and elementwise, so the output
/// has the same shape as the input.
///
/// # Arguments
///
/// * `grid` - Input grayscale grid
/// * `threshold` - Binarization cutoff
///
/// # Errors
///
/// Returns `BinarizeError::InvalidThreshold` if `threshold` is NaN or
/// infinite.
///
/// # Examples
///
/// ```
/// use blobseg_binarize::threshold_to_binary;
/// use blobseg_core::FGrid;
///
/// let gray = FGrid::from_data(2, 1, vec![0.3, 0.9]).unwrap();
/// let binary = threshold_to_binary(&gray, 0.5).unwrap();
/// assert_eq!(binary.get_pixel(0, 0), Some(false));
/// assert_eq!(binary.get_pixel(1, 0), Some(true));
/// ```
pub fn threshold_to_binary(grid: &FGrid, threshold: f32) -> BinarizeResult<BinGrid> {
    if !threshold.is_finite() {
        return Err(BinarizeError::InvalidThreshold(threshold));
    }

    let (width, height) = grid.dimensions();
    let data = grid.data().iter().map(|&v| v > threshold).collect();

    BinGrid::from_data(width, height, data).map_err(BinarizeError::Core)
}

/// Binarize several channels independently with the same threshold
///
/// Each channel is thresholded with [`threshold_to_binary`]; there is no
/// cross-channel interaction. All channels must share dimensions.
///
/// # Errors
///
/// Returns `BinarizeError::ChannelDimensionMismatch` if the channels
/// disagree on shape, or `BinarizeError::InvalidThreshold` for a
/// non-finite threshold.
pub fn threshold_channels(channels: &[FGrid], threshold: f32) -> BinarizeResult<Vec<BinGrid>> {
    let Some(first) = channels.first() else {
        return Ok(Vec::new());
    };

    let expected = first.dimensions();
    for channel in channels {
        if channel.dimensions() != expected {
            return Err(BinarizeError::ChannelDimensionMismatch {
                expected,
                actual: channel.dimensions(),
            });
        }
    }

    channels
        .iter()
        .map(|channel| threshold_to_binary(channel, threshold))
        .collect()
}
