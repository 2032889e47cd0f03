//! FGrid - floating-point sample grid
//!
//! `FGrid` is a 2D array of `f32` samples. It is the entry container for
//! segmentation: an image source decodes into an `FGrid` of grayscale
//! values normalized to a fixed range (typically `[0, 1]`), which is then
//! thresholded into a [`BinGrid`](crate::BinGrid).
//!
//! # Examples
//!
//! ```
//! use blobseg_core::FGrid;
//!
//! let mut grid = FGrid::new(100, 100).unwrap();
//!
//! grid.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(grid.get_pixel(10, 20).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};

/// Floating-point sample grid
///
/// A 2D array of `f32` values addressed by (x, y) = (column, row).
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FGrid {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f32>,
}

impl FGrid {
    /// Create a new FGrid with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use blobseg_core::FGrid;
    ///
    /// let grid = FGrid::new(640, 480).unwrap();
    /// assert_eq!(grid.width(), 640);
    /// assert_eq!(grid.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        let data = vec![0.0f32; size];

        Ok(FGrid {
            width,
            height,
            data,
        })
    }

    /// Create a new FGrid with all samples set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        let data = vec![value; size];

        Ok(FGrid {
            width,
            height,
            data,
        })
    }

    /// Create an FGrid from raw data
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `data` - Sample data in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(FGrid {
            width,
            height,
            data,
        })
    }

    /// Get the grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the sample value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        let idx = (y as usize) * (self.width as usize) + (x as usize);
        Ok(self.data[idx])
    }

    /// Set the sample value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
        Ok(())
    }

    /// Get a reference to the raw sample data (row-major)
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a mutable reference to the raw sample data (row-major)
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set all samples to the given value
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let grid = FGrid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert!(grid.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(FGrid::new(0, 10).is_err());
        assert!(FGrid::new(10, 0).is_err());
    }

    #[test]
    fn test_new_with_value() {
        let grid = FGrid::new_with_value(5, 5, 0.25).unwrap();
        assert_eq!(grid.get_pixel(4, 4).unwrap(), 0.25);
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let result = FGrid::from_data(3, 3, vec![0.0; 8]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = FGrid::new(3, 2).unwrap();
        grid.set_pixel(2, 1, 0.75).unwrap();
        assert_eq!(grid.get_pixel(2, 1).unwrap(), 0.75);
        // Neighbors untouched
        assert_eq!(grid.get_pixel(1, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = FGrid::new(3, 3).unwrap();
        assert!(grid.get_pixel(3, 0).is_err());
        assert!(grid.get_pixel(0, 3).is_err());
        assert!(grid.set_pixel(5, 5, 1.0).is_err());
    }

    #[test]
    fn test_fill() {
        let mut grid = FGrid::new(2, 2).unwrap();
        grid.fill(1.0);
        assert!(grid.data().iter().all(|&v| v == 1.0));
    }
}
