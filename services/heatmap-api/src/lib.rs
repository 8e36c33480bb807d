//! SST heatmap HTTP service internals.
//!
//! Exposed as a library so integration tests can drive the pipeline without
//! going through the binary.

pub mod config;
pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod state;
