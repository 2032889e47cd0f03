//! Grayscale segmentation pipeline
//!
//! Composes the binarizer and the labeling engine into one call:
//! optional inversion, fixed-threshold binarization, component labeling,
//! and size filtering. Each stage's output is kept on the result so
//! consumers (renderers, sinks) can pick the representation they need.

use crate::conncomp::{Component, ComponentFilter, Connectivity, LabelOptions, label_components};
use crate::error::RegionResult;
use blobseg_binarize::{invert, threshold_to_binary};
use blobseg_core::{BinGrid, FGrid, LabelGrid};

/// Options for grayscale segmentation
///
/// All parameters are caller-supplied; the only defaults are neutral
/// ones (no inversion, 4-way connectivity, accept-everything filter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    /// Invert samples (`1.0 - v`) before thresholding, for dark-on-light
    /// subjects
    pub negative: bool,
    /// Binarization cutoff; samples strictly greater become foreground
    pub threshold: f32,
    /// Connectivity used when flooding components
    pub connectivity: Connectivity,
    /// Acceptance floor for components
    pub filter: ComponentFilter,
}

impl SegmentOptions {
    /// Create options with the given threshold and neutral remaining
    /// parameters
    pub fn new(threshold: f32) -> Self {
        Self {
            negative: false,
            threshold,
            connectivity: Connectivity::default(),
            filter: ComponentFilter::default(),
        }
    }

    /// Enable or disable inversion before thresholding
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Set the flooding connectivity
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the acceptance filter
    pub fn with_filter(mut self, filter: ComponentFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Result of segmenting a grayscale grid
///
/// Holds the output of every pipeline stage.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Binarized grid (after optional inversion)
    pub binary: BinGrid,
    /// Label grid stamped by the engine
    pub labels: LabelGrid,
    /// Accepted components in seed order
    pub components: Vec<Component>,
    /// Number of components dropped by the filter
    pub discarded: u32,
}

/// Segment a grayscale grid into connected foreground components
///
/// Pipeline: optional inversion, strictly-greater thresholding,
/// row-major flood-fill labeling, size filtering.
///
/// # Examples
///
/// ```
/// use blobseg_core::FGrid;
/// use blobseg_region::{SegmentOptions, segment};
///
/// let gray = FGrid::from_data(3, 1, vec![0.9, 0.1, 0.9]).unwrap();
/// let result = segment(&gray, &SegmentOptions::new(0.5)).unwrap();
/// assert_eq!(result.components.len(), 2);
/// ```
pub fn segment(gray: &FGrid, options: &SegmentOptions) -> RegionResult<Segmentation> {
    let binary = if options.negative {
        threshold_to_binary(&invert(gray), options.threshold)?
    } else {
        threshold_to_binary(gray, options.threshold)?
    };

    let label_options = LabelOptions::new(options.connectivity).with_filter(options.filter);
    let labeling = label_components(&binary, &label_options)?;

    Ok(Segmentation {
        binary,
        labels: labeling.labels,
        components: labeling.components,
        discarded: labeling.discarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        // One bright 2x2 block and one bright single pixel
        let gray = FGrid::from_data(
            5,
            4,
            vec![
                0.9, 0.9, 0.0, 0.0, 0.0, //
                0.9, 0.9, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.9, //
            ],
        )
        .unwrap();

        let result = segment(&gray, &SegmentOptions::new(0.5)).unwrap();

        assert_eq!(result.binary.count_foreground(), 5);
        assert_eq!(result.components.len(), 2);
        assert_eq!(result.components[0].pixel_count, 4);
        assert_eq!(result.components[1].pixel_count, 1);
    }

    #[test]
    fn test_segment_with_filter() {
        let gray = FGrid::from_data(
            5,
            4,
            vec![
                0.9, 0.9, 0.0, 0.0, 0.0, //
                0.9, 0.9, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.9, //
            ],
        )
        .unwrap();

        let options =
            SegmentOptions::new(0.5).with_filter(ComponentFilter::default().with_min_pixels(2));
        let result = segment(&gray, &options).unwrap();

        assert_eq!(result.components.len(), 1);
        assert_eq!(result.discarded, 1);
        // The discarded pixel is still stamped in the label grid
        assert_eq!(result.labels.get_pixel(4, 3), Some(2));
    }

    #[test]
    fn test_segment_negative() {
        // Dark subject on a light background
        let gray = FGrid::from_data(3, 1, vec![0.9, 0.1, 0.9]).unwrap();

        let plain = segment(&gray, &SegmentOptions::new(0.5)).unwrap();
        assert_eq!(plain.components.len(), 2);

        let negative = segment(&gray, &SegmentOptions::new(0.5).with_negative(true)).unwrap();
        assert_eq!(negative.components.len(), 1);
        assert_eq!(negative.components[0].pixel_count, 1);
        assert_eq!(negative.components[0].left, 1);
    }

    #[test]
    fn test_segment_all_background() {
        let gray = FGrid::new(4, 4).unwrap();
        let result = segment(&gray, &SegmentOptions::new(0.5)).unwrap();

        assert!(result.components.is_empty());
        assert_eq!(result.binary.count_foreground(), 0);
        assert_eq!(result.discarded, 0);
    }

    #[test]
    fn test_segment_rejects_bad_threshold() {
        let gray = FGrid::new(2, 2).unwrap();
        assert!(segment(&gray, &SegmentOptions::new(f32::NAN)).is_err());
    }
}
