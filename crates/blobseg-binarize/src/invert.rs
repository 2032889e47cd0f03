//! Grayscale inversion
//!
//! For images where the subject is darker than the background, inverting
//! the samples before thresholding lets the same strictly-greater rule
//! pick out the subject.

use blobseg_core::FGrid;

/// Invert a grayscale grid
///
/// Computes `1.0 - v` for every sample, for inputs normalized to
/// `[0, 1]`. Pure and elementwise; the output has the same shape as the
/// input.
///
/// # Examples
///
/// ```
/// use blobseg_binarize::invert;
/// use blobseg_core::FGrid;
///
/// let gray = FGrid::from_data(2, 1, vec![0.25, 1.0]).unwrap();
/// let inverted = invert(&gray);
/// assert_eq!(inverted.get_pixel(0, 0).unwrap(), 0.75);
/// assert_eq!(inverted.get_pixel(1, 0).unwrap(), 0.0);
/// ```
pub fn invert(grid: &FGrid) -> FGrid {
    let mut inverted = grid.clone();
    for v in inverted.data_mut() {
        *v = 1.0 - *v;
    }
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_values() {
        let gray = FGrid::from_data(3, 1, vec![0.0, 0.4, 1.0]).unwrap();
        let inverted = invert(&gray);

        assert_eq!(inverted.get_pixel(0, 0).unwrap(), 1.0);
        assert_eq!(inverted.get_pixel(1, 0).unwrap(), 0.6);
        assert_eq!(inverted.get_pixel(2, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_invert_preserves_shape() {
        let gray = FGrid::new(5, 4).unwrap();
        let inverted = invert(&gray);
        assert_eq!(inverted.dimensions(), (5, 4));
    }

    #[test]
    fn test_invert_then_threshold_selects_dark() {
        use crate::threshold::threshold_to_binary;

        // Dark subject (0.1) on a light background (0.9)
        let gray = FGrid::from_data(3, 1, vec![0.9, 0.1, 0.9]).unwrap();
        let binary = threshold_to_binary(&invert(&gray), 0.5).unwrap();

        assert_eq!(binary.get_pixel(0, 0), Some(false));
        assert_eq!(binary.get_pixel(1, 0), Some(true));
        assert_eq!(binary.get_pixel(2, 0), Some(false));
    }
}
