//! blobseg-test - Regression test framework for blobseg
//!
//! This crate provides the regression test harness and grid-building
//! helpers used across the workspace, supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use blobseg_test::{RegParams, bin_grid_from_rows};
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(2.0, components.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use blobseg_core::{BinGrid, FGrid, LabelGrid};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // blobseg-test is at crates/blobseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a binary grid from ASCII rows
///
/// Each row is a string of `'1'` (foreground) and `'0'` (background)
/// characters; all rows must have the same length.
///
/// # Examples
///
/// ```
/// use blobseg_test::bin_grid_from_rows;
///
/// let bin = bin_grid_from_rows(&["110", "100", "001"]).unwrap();
/// assert_eq!(bin.count_foreground(), 4);
/// ```
pub fn bin_grid_from_rows(rows: &[&str]) -> TestResult<BinGrid> {
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for row in rows {
        if row.len() as u32 != width {
            return Err(TestError::InvalidPattern(format!(
                "row length {} doesn't match width {}",
                row.len(),
                width
            )));
        }
        for ch in row.chars() {
            match ch {
                '1' => data.push(true),
                '0' => data.push(false),
                other => {
                    return Err(TestError::InvalidPattern(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            }
        }
    }

    Ok(BinGrid::from_data(width, height, data)?)
}

/// Build a floating-point grid from rows of samples
///
/// All rows must have the same length.
pub fn fgrid_from_rows(rows: &[&[f32]]) -> TestResult<FGrid> {
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for row in rows {
        if row.len() as u32 != width {
            return Err(TestError::InvalidPattern(format!(
                "row length {} doesn't match width {}",
                row.len(),
                width
            )));
        }
        data.extend_from_slice(row);
    }

    Ok(FGrid::from_data(width, height, data)?)
}

/// Build a reproducible random binary grid
///
/// Each pixel is foreground with probability `fill`, drawn from an RNG
/// seeded with `seed` so runs are repeatable.
pub fn random_bin_grid(width: u32, height: u32, fill: f64, seed: u64) -> TestResult<BinGrid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = (width as usize) * (height as usize);
    let data = (0..size).map(|_| rng.random_bool(fill)).collect();

    Ok(BinGrid::from_data(width, height, data)?)
}

/// Render a binary grid as ASCII rows ('1'/'0'), one row per line
pub fn render_bin_grid(bin: &BinGrid) -> String {
    let (width, height) = bin.dimensions();
    let mut out = String::with_capacity(((width + 1) as usize) * (height as usize));

    for y in 0..height {
        for x in 0..width {
            out.push(if bin.get_pixel(x, y) == Some(true) {
                '1'
            } else {
                '0'
            });
        }
        out.push('\n');
    }

    out
}

/// Render a label grid as space-separated labels, one row per line
pub fn render_label_grid(labels: &LabelGrid) -> String {
    let (width, height) = labels.dimensions();
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            if x > 0 {
                out.push(' ');
            }
            out.push_str(&labels.get_pixel(x, y).unwrap_or_default().to_string());
        }
        out.push('\n');
    }

    out
}
