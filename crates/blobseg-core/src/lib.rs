//! blobseg-core - Basic data structures for raster segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the blobseg segmentation library:
//!
//! - [`FGrid`] - Floating-point sample grid (raw grayscale input)
//! - [`BinGrid`] - Binary foreground/background grid
//! - [`LabelGrid`] - Component label grid produced by labeling
//! - [`Box`] - Rectangle regions
//!
//! The three grids run in parallel over the same (x, y) address space:
//! an image source fills an `FGrid`, the binarizer reduces it to a
//! `BinGrid`, and the labeling engine stamps component labels into a
//! `LabelGrid`.

pub mod bingrid;
pub mod box_;
pub mod error;
pub mod fgrid;
pub mod labelgrid;

pub use bingrid::BinGrid;
pub use box_::Box;
pub use error::{Error, Result};
pub use fgrid::FGrid;
pub use labelgrid::{LabelGrid, UNLABELED};
