//! Heatmap rendering for the reduced SST grid.
//!
//! - Color ramp: piecewise-linear interpolation over fixed control points
//! - Compositing: per-cell painting over a preloaded base map
//! - PNG encoding: hand-rolled RGBA encoder (flate2 + crc32fast)

pub mod compose;
pub mod png;
pub mod ramp;

pub use compose::{load_base_image, render_heatmap};
pub use png::encode_png;
pub use ramp::{ColorRamp, ColorStop};
