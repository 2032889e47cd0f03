//! blobseg - Binary raster segmentation
//!
//! blobseg extracts connected foreground regions from binary raster
//! images and reports, per region, its pixel count and axis-aligned
//! bounding box, discarding regions below configured size floors.
//!
//! # Overview
//!
//! The library is a pipeline of two stages over parallel grids:
//!
//! - **Binarization** - threshold a grayscale [`FGrid`] into a
//!   [`BinGrid`] (with optional inversion for dark-on-light subjects)
//! - **Labeling** - flood-fill every connected foreground region into a
//!   [`LabelGrid`] and collect per-region records, in deterministic
//!   row-major seed order
//!
//! # Example
//!
//! ```
//! use blobseg::FGrid;
//! use blobseg::region::{ComponentFilter, SegmentOptions, segment};
//!
//! // A bright 2x2 block and a stray bright pixel
//! let gray = FGrid::from_data(
//!     4,
//!     3,
//!     vec![
//!         0.9, 0.9, 0.0, 0.0, //
//!         0.9, 0.9, 0.0, 0.0, //
//!         0.0, 0.0, 0.0, 0.9, //
//!     ],
//! )
//! .unwrap();
//!
//! // Keep only regions of at least 2 pixels
//! let options = SegmentOptions::new(0.5)
//!     .with_filter(ComponentFilter::default().with_min_pixels(2));
//! let result = segment(&gray, &options).unwrap();
//!
//! assert_eq!(result.components.len(), 1);
//! assert_eq!(result.components[0].pixel_count, 4);
//! assert_eq!(result.discarded, 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use blobseg_binarize as binarize;
pub use blobseg_region as region;
