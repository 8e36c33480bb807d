//! Spatial reduction of the full-resolution raster.

mod downsample;

pub use downsample::block_mean;
