//! Box-average sampling of a grayscale grid into square regions.
//!
//! Each output cell is the plain arithmetic mean of a `region_size` x
//! `region_size` block of source pixels. Pixels past the last full block on
//! the right and bottom edges are dropped, not folded into a partial cell.

use tracing::{debug, warn};

use crate::error::{Result, StippleError};
use crate::grid::{BrightnessGrid, PixelGrid};

/// Reduce `grid` to per-region average brightness.
///
/// The output is `floor(width / region_size)` x `floor(height / region_size)`.
/// A region larger than the image yields an empty grid, which is not an
/// error. `region_size == 0` is rejected.
pub fn sample(grid: &PixelGrid, region_size: usize) -> Result<BrightnessGrid> {
    if region_size == 0 {
        return Err(StippleError::InvalidConfig(
            "region_size must be positive".to_string(),
        ));
    }

    let out_width = grid.width() / region_size;
    let out_height = grid.height() / region_size;

    if out_width == 0 || out_height == 0 {
        warn!(
            width = grid.width(),
            height = grid.height(),
            region_size,
            "Region larger than source image, brightness grid is empty"
        );
        return Ok(BrightnessGrid::empty());
    }

    let cell_area = (region_size * region_size) as f64;
    let mut values = Vec::with_capacity(out_width * out_height);

    for row in 0..out_height {
        for col in 0..out_width {
            let sum = block_sum(grid, col * region_size, row * region_size, region_size);
            values.push(sum as f64 / cell_area);
        }
    }

    debug!(
        source_width = grid.width(),
        source_height = grid.height(),
        region_size,
        grid_width = out_width,
        grid_height = out_height,
        "Sampled brightness grid"
    );

    Ok(BrightnessGrid::from_values(out_width, out_height, values))
}

/// Sum of the `size` x `size` block whose top-left pixel is `(x0, y0)`.
#[inline]
fn block_sum(grid: &PixelGrid, x0: usize, y0: usize, size: usize) -> u64 {
    (y0..y0 + size)
        .map(|y| {
            grid.row(y)[x0..x0 + size]
                .iter()
                .map(|&v| v as u64)
                .sum::<u64>()
        })
        .sum()
}
