//! Common types and constants shared across the sst-heatmap crates.

pub mod color;
pub mod error;
pub mod grid;

pub use color::Color;
pub use error::{HeatmapError, HeatmapResult};
pub use grid::{FullGrid, ReducedGrid};

/// Width of the raw SST raster in cells (one byte per cell).
pub const GRID_WIDTH: usize = 36000;

/// Height of the raw SST raster in cells.
pub const GRID_HEIGHT: usize = 18000;

/// Edge length of the square averaging block used for downsampling.
pub const BLOCK_SIZE: usize = 10;

/// Width of the downsampled heatmap (and of the base map asset).
pub const HEATMAP_WIDTH: usize = GRID_WIDTH / BLOCK_SIZE;

/// Height of the downsampled heatmap.
pub const HEATMAP_HEIGHT: usize = GRID_HEIGHT / BLOCK_SIZE;
