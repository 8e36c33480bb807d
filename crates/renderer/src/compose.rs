//! Compositing the reduced grid over the base map.

use std::path::Path;

use sst_common::{HeatmapError, HeatmapResult, ReducedGrid};
use tracing::debug;

use crate::ramp::ColorRamp;

/// Load the base map asset and return its RGBA pixels.
///
/// The asset must decode to exactly `width x height`; anything else is
/// [`HeatmapError::AssetMissing`], as is a missing or undecodable file.
pub fn load_base_image(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
) -> HeatmapResult<Vec<u8>> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| HeatmapError::AssetMissing(format!("{}: {}", path.display(), e)))?;

    let rgba = img.to_rgba8();
    if rgba.width() as usize != width || rgba.height() as usize != height {
        return Err(HeatmapError::AssetMissing(format!(
            "{}: expected {}x{}, got {}x{}",
            path.display(),
            width,
            height,
            rgba.width(),
            rgba.height()
        )));
    }

    Ok(rgba.into_raw())
}

/// Paint the reduced grid onto a copy of the base image.
///
/// Every cell is painted unconditionally, one pixel per cell; transparent
/// out-of-domain colors also replace the backdrop pixel, punching a
/// transparent hole rather than letting the base show through. That is the
/// intended output, not a blending bug.
///
/// `base` must be an RGBA buffer of exactly the grid's dimensions. A fresh
/// output buffer is allocated per call so concurrent renders never share a
/// canvas.
pub fn render_heatmap(
    grid: &ReducedGrid,
    base: &[u8],
    ramp: &ColorRamp,
) -> HeatmapResult<Vec<u8>> {
    let (width, height) = (grid.width(), grid.height());
    if base.len() != width * height * 4 {
        return Err(HeatmapError::DimensionMismatch {
            expected: format!("{} base bytes for {}x{} RGBA", width * height * 4, width, height),
            actual: format!("{} bytes", base.len()),
        });
    }

    let mut pixels = base.to_vec();
    let data = grid.data();

    for (idx, &value) in data.iter().enumerate() {
        let color = ramp.color_for(value as f64);
        let p = idx * 4;
        pixels[p] = color.r;
        pixels[p + 1] = color.g;
        pixels[p + 2] = color.b;
        pixels[p + 3] = color.a;
    }

    debug!(width, height, "Composited heatmap");
    Ok(pixels)
}
