//! blobseg-region - Connected component labeling
//!
//! This crate is the labeling engine of the blobseg library:
//!
//! - **Component labeling** - flood-fill every connected foreground
//!   region of a binary grid, in deterministic row-major seed order
//! - **Size filtering** - drop components below configured width,
//!   height and pixel-count floors
//! - **Segmentation pipeline** - inversion, thresholding, labeling and
//!   filtering composed behind one call
//!
//! # Examples
//!
//! ## Labeling a binary grid
//!
//! ```
//! use blobseg_core::BinGrid;
//! use blobseg_region::{Connectivity, find_components};
//!
//! let mut bin = BinGrid::new(100, 100).unwrap();
//! bin.set_pixel(10, 10, true).unwrap();
//! bin.set_pixel(11, 10, true).unwrap();
//! bin.set_pixel(50, 50, true).unwrap();
//!
//! let components = find_components(&bin, Connectivity::FourWay).unwrap();
//! assert_eq!(components.len(), 2);
//! ```
//!
//! ## Full pipeline
//!
//! ```
//! use blobseg_core::FGrid;
//! use blobseg_region::{ComponentFilter, SegmentOptions, segment};
//!
//! let gray = FGrid::from_data(2, 2, vec![0.9, 0.0, 0.9, 0.0]).unwrap();
//! let options = SegmentOptions::new(0.5)
//!     .with_filter(ComponentFilter::default().with_min_pixels(2));
//! let result = segment(&gray, &options).unwrap();
//! assert_eq!(result.components.len(), 1);
//! ```

pub mod conncomp;
pub mod error;
pub mod segment;

// Re-export core types
pub use blobseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    Component, ComponentFilter, Connectivity, LabelOptions, Labeling, find_components,
    label_components,
};

// Re-export segment types and functions
pub use segment::{SegmentOptions, Segmentation, segment};
