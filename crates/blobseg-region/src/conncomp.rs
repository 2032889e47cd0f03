//! Connected component labeling
//!
//! This module is the labeling engine: it scans a binary grid in
//! row-major order and floods every connected foreground region with a
//! unique label, accumulating per-region pixel counts and bounding
//! boxes. Regions below the configured size floors are dropped from the
//! output sequence but keep their stamp in the label grid.
//!
//! Scan order is the only source of ordering: labels are assigned
//! top-to-bottom, left-to-right by seed pixel, so labeling the same grid
//! twice produces identical output. The flood uses an explicit worklist
//! rather than recursion, so a single giant region costs heap, not call
//! stack.

use crate::error::RegionResult;
use blobseg_core::{BinGrid, Box, LabelGrid, UNLABELED};
use std::collections::VecDeque;

/// Connectivity used when flooding components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// A connected foreground region
///
/// Bounding-box coordinates are inclusive: `top <= bottom` and
/// `left <= right`, and every pixel of the region lies inside
/// `[top, bottom] x [left, right]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Label stamped into the label grid for this region's pixels
    pub label: u32,
    /// Number of pixels flooded into this region
    pub pixel_count: u32,
    /// Topmost row (inclusive)
    pub top: u32,
    /// Leftmost column (inclusive)
    pub left: u32,
    /// Bottommost row (inclusive)
    pub bottom: u32,
    /// Rightmost column (inclusive)
    pub right: u32,
}

impl Component {
    /// Bounding rectangle as a core [`Box`] (inclusive pixel span)
    pub fn bounds(&self) -> Box {
        Box::new_unchecked(
            self.left as i32,
            self.top as i32,
            (self.right - self.left + 1) as i32,
            (self.bottom - self.top + 1) as i32,
        )
    }
}

/// Acceptance floor for components
///
/// A component is kept only if it clears all three floors. Width and
/// height are measured as coordinate differences (`right - left`,
/// `bottom - top`), one less than the inclusive pixel span: a component
/// spanning rows 0..=7 has a height of 7 under this rule. Callers tune
/// thresholds against this definition.
///
/// The default filter is all-zero and accepts every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentFilter {
    /// Minimum `right - left`
    pub min_width: u32,
    /// Minimum `bottom - top`
    pub min_height: u32,
    /// Minimum pixel count
    pub min_pixels: u32,
}

impl ComponentFilter {
    /// Create a filter with the given floors
    pub fn new(min_width: u32, min_height: u32, min_pixels: u32) -> Self {
        Self {
            min_width,
            min_height,
            min_pixels,
        }
    }

    /// Set the minimum width (coordinate difference)
    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the minimum height (coordinate difference)
    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the minimum pixel count
    pub fn with_min_pixels(mut self, min_pixels: u32) -> Self {
        self.min_pixels = min_pixels;
        self
    }

    /// Check whether a component clears every floor
    pub fn accepts(&self, component: &Component) -> bool {
        component.pixel_count >= self.min_pixels
            && component.bottom - component.top >= self.min_height
            && component.right - component.left >= self.min_width
    }
}

/// Options for component labeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelOptions {
    /// Connectivity used when flooding
    pub connectivity: Connectivity,
    /// Acceptance floor applied after each flood completes
    pub filter: ComponentFilter,
}

impl LabelOptions {
    /// Create options with the specified connectivity and a neutral filter
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            filter: ComponentFilter::default(),
        }
    }

    /// Set the acceptance filter
    pub fn with_filter(mut self, filter: ComponentFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Result of labeling a binary grid
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Label grid: every originally-foreground pixel carries the label of
    /// its component (accepted or discarded); background stays
    /// [`UNLABELED`]
    pub labels: LabelGrid,
    /// Accepted components in first-seed-encountered order
    pub components: Vec<Component>,
    /// Number of components dropped by the filter
    pub discarded: u32,
}

/// Label all connected foreground components of a binary grid
///
/// Scans in row-major order; each foreground pixel not yet labeled seeds
/// a flood fill under the configured connectivity. The label counter
/// starts at 1 and increments for every seed, whether or not the
/// component passes the filter, so labels of discarded components are
/// never reused. Accepted components are returned in seed order.
///
/// # Examples
///
/// ```
/// use blobseg_core::BinGrid;
/// use blobseg_region::{Connectivity, LabelOptions, label_components};
///
/// // Two pixels touching, one isolated
/// let mut bin = BinGrid::new(10, 10).unwrap();
/// bin.set_pixel(1, 1, true).unwrap();
/// bin.set_pixel(2, 1, true).unwrap();
/// bin.set_pixel(7, 7, true).unwrap();
///
/// let options = LabelOptions::new(Connectivity::FourWay);
/// let labeling = label_components(&bin, &options).unwrap();
/// assert_eq!(labeling.components.len(), 2);
/// ```
pub fn label_components(bin: &BinGrid, options: &LabelOptions) -> RegionResult<Labeling> {
    let (width, height) = bin.dimensions();
    let mut labels = LabelGrid::new(width, height)?;
    let mut components = Vec::new();
    let mut discarded = 0u32;
    let mut next_label = 1u32;
    let mut worklist = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if bin.get_pixel(x, y) != Some(true) || labels.get_pixel(x, y) != Some(UNLABELED) {
                continue;
            }

            let component = flood(
                bin,
                &mut labels,
                &mut worklist,
                x,
                y,
                next_label,
                options.connectivity,
            );
            next_label += 1;

            if options.filter.accepts(&component) {
                components.push(component);
            } else {
                discarded += 1;
            }
        }
    }

    Ok(Labeling {
        labels,
        components,
        discarded,
    })
}

/// Find all connected foreground components without filtering
///
/// Convenience wrapper around [`label_components`] with a neutral filter,
/// discarding the label grid.
pub fn find_components(bin: &BinGrid, connectivity: Connectivity) -> RegionResult<Vec<Component>> {
    let labeling = label_components(bin, &LabelOptions::new(connectivity))?;
    Ok(labeling.components)
}

/// Flood one component from its seed pixel
///
/// Pops pending coordinates off the worklist, folds each into the
/// running pixel count and bounding rectangle, and pushes unlabeled
/// in-bounds foreground neighbors. A pixel is stamped when pushed, so it
/// enters the worklist at most once.
fn flood(
    bin: &BinGrid,
    labels: &mut LabelGrid,
    worklist: &mut VecDeque<(u32, u32)>,
    seed_x: u32,
    seed_y: u32,
    label: u32,
    connectivity: Connectivity,
) -> Component {
    let width = bin.width();
    let height = bin.height();

    let mut component = Component {
        label,
        pixel_count: 0,
        top: seed_y,
        left: seed_x,
        bottom: seed_y,
        right: seed_x,
    };

    worklist.clear();
    let _ = labels.set_pixel(seed_x, seed_y, label);
    worklist.push_back((seed_x, seed_y));

    while let Some((x, y)) = worklist.pop_front() {
        component.pixel_count += 1;
        component.left = component.left.min(x);
        component.right = component.right.max(x);
        component.top = component.top.min(y);
        component.bottom = component.bottom.max(y);

        // 4-way neighbors, bounds guarded before any access
        if x > 0 {
            try_push(bin, labels, worklist, x - 1, y, label);
        }
        if x + 1 < width {
            try_push(bin, labels, worklist, x + 1, y, label);
        }
        if y > 0 {
            try_push(bin, labels, worklist, x, y - 1, label);
        }
        if y + 1 < height {
            try_push(bin, labels, worklist, x, y + 1, label);
        }

        // Diagonal neighbors for 8-way connectivity
        if connectivity == Connectivity::EightWay {
            if x > 0 && y > 0 {
                try_push(bin, labels, worklist, x - 1, y - 1, label);
            }
            if x + 1 < width && y > 0 {
                try_push(bin, labels, worklist, x + 1, y - 1, label);
            }
            if x > 0 && y + 1 < height {
                try_push(bin, labels, worklist, x - 1, y + 1, label);
            }
            if x + 1 < width && y + 1 < height {
                try_push(bin, labels, worklist, x + 1, y + 1, label);
            }
        }
    }

    component
}

/// Stamp and enqueue (x, y) if it is unlabeled foreground
#[inline]
fn try_push(
    bin: &BinGrid,
    labels: &mut LabelGrid,
    worklist: &mut VecDeque<(u32, u32)>,
    x: u32,
    y: u32,
    label: u32,
) {
    if bin.get_pixel(x, y) == Some(true) && labels.get_pixel(x, y) == Some(UNLABELED) {
        let _ = labels.set_pixel(x, y, label);
        worklist.push_back((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_grid(width: u32, height: u32, pixels: &[(u32, u32)]) -> BinGrid {
        let mut bin = BinGrid::new(width, height).unwrap();
        for &(x, y) in pixels {
            let _ = bin.set_pixel(x, y, true);
        }
        bin
    }

    fn label_default(bin: &BinGrid) -> Labeling {
        label_components(bin, &LabelOptions::new(Connectivity::FourWay)).unwrap()
    }

    #[test]
    fn test_l_shape_and_isolated_pixel() {
        // 110
        // 100
        // 001
        let bin = create_test_grid(3, 3, &[(0, 0), (1, 0), (0, 1), (2, 2)]);
        let labeling = label_default(&bin);

        assert_eq!(labeling.components.len(), 2);
        assert_eq!(labeling.discarded, 0);

        let first = &labeling.components[0];
        assert_eq!(first.label, 1);
        assert_eq!(first.pixel_count, 3);
        assert_eq!((first.top, first.left, first.bottom, first.right), (0, 0, 1, 1));

        let second = &labeling.components[1];
        assert_eq!(second.label, 2);
        assert_eq!(second.pixel_count, 1);
        assert_eq!(
            (second.top, second.left, second.bottom, second.right),
            (2, 2, 2, 2)
        );

        assert!(first.label < second.label);
    }

    #[test]
    fn test_min_pixels_discards_but_stamps() {
        let bin = create_test_grid(3, 3, &[(0, 0), (1, 0), (0, 1), (2, 2)]);
        let options = LabelOptions::new(Connectivity::FourWay)
            .with_filter(ComponentFilter::default().with_min_pixels(2));
        let labeling = label_components(&bin, &options).unwrap();

        assert_eq!(labeling.components.len(), 1);
        assert_eq!(labeling.components[0].pixel_count, 3);
        assert_eq!(labeling.discarded, 1);

        // The isolated pixel keeps its stamp even though it was dropped
        assert_eq!(labeling.labels.get_pixel(2, 2), Some(2));
    }

    #[test]
    fn test_all_background() {
        let bin = BinGrid::new(5, 5).unwrap();
        let labeling = label_default(&bin);

        assert!(labeling.components.is_empty());
        assert_eq!(labeling.discarded, 0);
        assert_eq!(labeling.labels.max_label(), UNLABELED);
    }

    #[test]
    fn test_all_foreground() {
        let mut bin = BinGrid::new(6, 4).unwrap();
        for y in 0..4 {
            for x in 0..6 {
                bin.set_pixel(x, y, true).unwrap();
            }
        }
        let labeling = label_default(&bin);

        assert_eq!(labeling.components.len(), 1);
        let c = &labeling.components[0];
        assert_eq!(c.pixel_count, 24);
        assert_eq!((c.top, c.left, c.bottom, c.right), (0, 0, 3, 5));
    }

    #[test]
    fn test_partition_property() {
        // Scattered regions plus noise pixels
        let bin = create_test_grid(
            8,
            8,
            &[
                (0, 0),
                (1, 0),
                (0, 1),
                (4, 0),
                (4, 1),
                (4, 2),
                (7, 7),
                (6, 7),
                (2, 5),
            ],
        );
        let labeling = label_default(&bin);

        // Every foreground pixel is stamped, every background pixel is not
        for y in 0..8 {
            for x in 0..8 {
                let fg = bin.get_pixel(x, y) == Some(true);
                let stamped = labeling.labels.get_pixel(x, y) != Some(UNLABELED);
                assert_eq!(fg, stamped, "mismatch at ({}, {})", x, y);
            }
        }

        // Pixel counts sum to the foreground total
        let total: u32 = labeling.components.iter().map(|c| c.pixel_count).sum();
        assert_eq!(total as usize, bin.count_foreground());

        // Per-component stamp counts agree with the records
        for c in &labeling.components {
            assert_eq!(labeling.labels.count_label(c.label), c.pixel_count as usize);
        }
    }

    #[test]
    fn test_determinism() {
        let bin = create_test_grid(6, 6, &[(0, 0), (1, 0), (3, 3), (3, 4), (4, 3), (5, 5)]);

        let first = label_default(&bin);
        let second = label_default(&bin);

        assert_eq!(first.components, second.components);
        assert_eq!(first.labels, second.labels);
    }

    #[test]
    fn test_bounding_box_tightness() {
        // Plus shape centered at (2, 2)
        let bin = create_test_grid(5, 5, &[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
        let labeling = label_default(&bin);

        assert_eq!(labeling.components.len(), 1);
        let c = &labeling.components[0];
        let bounds = c.bounds();

        let mut touches_top = false;
        let mut touches_bottom = false;
        let mut touches_left = false;
        let mut touches_right = false;

        for y in 0..5 {
            for x in 0..5 {
                if labeling.labels.get_pixel(x, y) != Some(c.label) {
                    continue;
                }
                assert!(bounds.contains_point(x as i32, y as i32));
                touches_top |= y == c.top;
                touches_bottom |= y == c.bottom;
                touches_left |= x == c.left;
                touches_right |= x == c.right;
            }
        }

        assert!(touches_top && touches_bottom && touches_left && touches_right);
    }

    #[test]
    fn test_filter_difference_semantics() {
        // Horizontal bar spanning columns 0..=7 on one row:
        // right - left = 7, bottom - top = 0
        let bin = create_test_grid(8, 3, &[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1)]);

        // min_width 7 passes (difference, not inclusive span)
        let options = LabelOptions::new(Connectivity::FourWay)
            .with_filter(ComponentFilter::new(7, 0, 0));
        assert_eq!(label_components(&bin, &options).unwrap().components.len(), 1);

        // min_width 8 fails even though the bar is 8 pixels wide
        let options = LabelOptions::new(Connectivity::FourWay)
            .with_filter(ComponentFilter::new(8, 0, 0));
        let labeling = label_components(&bin, &options).unwrap();
        assert!(labeling.components.is_empty());
        assert_eq!(labeling.discarded, 1);

        // min_height 1 fails for a single-row bar
        let options = LabelOptions::new(Connectivity::FourWay)
            .with_filter(ComponentFilter::new(0, 1, 0));
        assert!(label_components(&bin, &options).unwrap().components.is_empty());
    }

    #[test]
    fn test_labels_monotone_across_discards() {
        // Three components in scan order; the middle one is a single pixel
        let bin = create_test_grid(9, 2, &[(0, 0), (1, 0), (4, 0), (7, 0), (8, 0)]);
        let options = LabelOptions::new(Connectivity::FourWay)
            .with_filter(ComponentFilter::default().with_min_pixels(2));
        let labeling = label_components(&bin, &options).unwrap();

        assert_eq!(labeling.components.len(), 2);
        assert_eq!(labeling.discarded, 1);

        // The discarded middle component consumed label 2
        assert_eq!(labeling.components[0].label, 1);
        assert_eq!(labeling.components[1].label, 3);
        assert_eq!(labeling.labels.get_pixel(4, 0), Some(2));
    }

    #[test]
    fn test_no_unlabeled_foreground_remains() {
        let bin = create_test_grid(7, 7, &[(0, 0), (3, 2), (3, 3), (4, 3), (6, 6), (5, 6)]);
        let labeling = label_default(&bin);

        for y in 0..7 {
            for x in 0..7 {
                if bin.get_pixel(x, y) == Some(true) {
                    assert_ne!(labeling.labels.get_pixel(x, y), Some(UNLABELED));
                }
            }
        }
    }

    #[test]
    fn test_four_way_splits_diagonal() {
        // Two pixels touching only at a corner
        let bin = create_test_grid(4, 4, &[(1, 1), (2, 2)]);

        let four = find_components(&bin, Connectivity::FourWay).unwrap();
        assert_eq!(four.len(), 2);

        let eight = find_components(&bin, Connectivity::EightWay).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 2);
    }

    #[test]
    fn test_snake_single_component() {
        // A winding path exercises the worklist beyond trivial shapes
        let bin = create_test_grid(
            5,
            5,
            &[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (4, 1),
                (4, 2),
                (3, 2),
                (2, 2),
                (1, 2),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 4),
                (2, 4),
                (3, 4),
                (4, 4),
            ],
        );
        let labeling = label_default(&bin);

        assert_eq!(labeling.components.len(), 1);
        assert_eq!(labeling.components[0].pixel_count, 17);
        let c = &labeling.components[0];
        assert_eq!((c.top, c.left, c.bottom, c.right), (0, 0, 4, 4));
    }

    #[test]
    fn test_component_bounds_box() {
        let bin = create_test_grid(6, 6, &[(2, 1), (3, 1), (2, 2), (3, 2)]);
        let components = find_components(&bin, Connectivity::FourWay).unwrap();

        assert_eq!(components.len(), 1);
        let bounds = components[0].bounds();
        assert_eq!((bounds.x, bounds.y, bounds.w, bounds.h), (2, 1, 2, 2));
        assert_eq!(bounds.area(), 4);
    }
}
