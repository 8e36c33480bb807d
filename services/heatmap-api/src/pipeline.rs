//! The end-to-end heatmap pipeline.
//!
//! Strictly sequential: decode completes before downsampling starts, which
//! completes before rendering starts. Each stage hands its grid to the next
//! by ownership transfer, and every run allocates its own buffers, so
//! concurrent requests cannot interfere with each other.

use grid_decoder::read_grid_file;
use grid_processor::block_mean;
use renderer::{encode_png, load_base_image, render_heatmap, ColorRamp};
use sst_common::{HeatmapError, HeatmapResult};
use tracing::{info, instrument, warn};

use crate::config::PipelineConfig;
use crate::extract::extract_archive;

/// Run one full pipeline pass and return the encoded PNG.
#[instrument(skip(config), fields(archive = %config.archive_path.display()))]
pub async fn produce_heatmap(config: &PipelineConfig) -> HeatmapResult<Vec<u8>> {
    // Archive extraction is blocking file I/O; keep it off the async reactor.
    let archive = config.archive_path.clone();
    let dest = config.extract_dir.clone();
    let grid_path = tokio::task::spawn_blocking(move || extract_archive(&archive, &dest))
        .await
        .map_err(|e| HeatmapError::Internal(e.to_string()))??;

    let grid = read_grid_file(&grid_path, config.grid_width, config.grid_height).await?;

    let (out_width, out_height) = (config.out_width(), config.out_height());
    let reduced = block_mean(&grid, config.block_size, out_width, out_height)?;

    let base = load_base_image(&config.base_image_path, out_width, out_height)?;
    let ramp = ColorRamp::sst();
    let pixels = render_heatmap(&reduced, &base, &ramp)?;
    let png = encode_png(&pixels, out_width, out_height)?;

    info!(
        out_width,
        out_height,
        png_bytes = png.len(),
        "Heatmap rendered"
    );

    // Optional side channel: persist a snapshot without blocking the caller.
    // A write failure is logged, never surfaced.
    if let Some(snapshot) = &config.snapshot_path {
        let snapshot = snapshot.clone();
        let bytes = png.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::fs::write(&snapshot, &bytes).await {
                warn!(path = %snapshot.display(), error = %e, "Failed to persist snapshot");
            }
        });
    }

    Ok(png)
}
