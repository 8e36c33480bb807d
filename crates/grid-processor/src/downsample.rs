//! Block-mean downsampling.
//!
//! Reduces the byte raster by replacing each `block x block` cell group with
//! its arithmetic mean, then reverses the row order so the result reads
//! top-down like the output image. Every source cell contributes to its
//! block's mean; there is no sentinel/no-data exclusion. If masking is ever
//! wanted it should arrive as an explicit option here, not as a conditional
//! buried in the loop.

use sst_common::{FullGrid, HeatmapError, HeatmapResult, ReducedGrid};
use tracing::debug;

/// Downsample a grid by averaging non-overlapping square blocks.
///
/// Output cell (x, y) is the mean of the source cells at rows
/// `[y*block, y*block+block)` and columns `[x*block, x*block+block)`.
/// Row order of the result is reversed relative to the source.
///
/// The output shape must fit inside the source grid
/// (`out_width * block <= grid.width()` and likewise for height) and `block`
/// must be non-zero; violations return [`HeatmapError::DimensionMismatch`].
pub fn block_mean(
    grid: &FullGrid,
    block: usize,
    out_width: usize,
    out_height: usize,
) -> HeatmapResult<ReducedGrid> {
    if block == 0 || out_width * block > grid.width() || out_height * block > grid.height() {
        return Err(HeatmapError::DimensionMismatch {
            expected: format!(
                "{}x{} output with block {} within {}x{} grid",
                out_width,
                out_height,
                block,
                grid.width(),
                grid.height()
            ),
            actual: format!("{}x{} needed", out_width * block, out_height * block),
        });
    }

    let data = grid.data();
    let width = grid.width();
    let cells_per_block = (block * block) as f32;

    let mut output = vec![0.0f32; out_width * out_height];

    for out_y in 0..out_height {
        // Reversed row placement: the last computed row lands first.
        let dest_row = out_height - 1 - out_y;
        for out_x in 0..out_width {
            let mut sum = 0u32;
            for dy in 0..block {
                let src_row = (out_y * block + dy) * width + out_x * block;
                for dx in 0..block {
                    sum += data[src_row + dx] as u32;
                }
            }
            output[dest_row * out_width + out_x] = sum as f32 / cells_per_block;
        }
    }

    debug!(
        src_width = grid.width(),
        src_height = grid.height(),
        out_width,
        out_height,
        block,
        "Downsampled grid"
    );

    Ok(ReducedGrid::new(output, out_width, out_height))
}
