//! Streaming decode of the fixed-layout binary SST raster.
//!
//! The input is exactly `width * height` bytes in row-major order, one
//! unsigned byte per cell. The decoder accepts the stream in arbitrarily
//! sized chunks and fills a zero-initialized [`sst_common::FullGrid`]
//! incrementally, so
//! the full file never has to be resident as a single contiguous buffer
//! before processing begins.

mod decoder;
mod reader;

pub use decoder::GridDecoder;
pub use reader::read_grid_file;
