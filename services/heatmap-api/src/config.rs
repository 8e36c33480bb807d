//! Pipeline configuration.

use std::path::PathBuf;

use sst_common::{BLOCK_SIZE, GRID_HEIGHT, GRID_WIDTH};

/// Everything one pipeline run needs to know.
///
/// The grid dimensions are fixed production constants; they live here (rather
/// than being re-read from the constants at each stage) so tests can run the
/// identical pipeline against small synthetic inputs. They are deliberately
/// not exposed through the CLI.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Compressed archive containing the raw grid file.
    pub archive_path: PathBuf,
    /// Directory the raw grid file is extracted into.
    pub extract_dir: PathBuf,
    /// Base map asset, dimensions equal to the downsampled output.
    pub base_image_path: PathBuf,
    /// Optional path to persist the rendered PNG to after each run.
    pub snapshot_path: Option<PathBuf>,

    pub grid_width: usize,
    pub grid_height: usize,
    pub block_size: usize,
}

impl PipelineConfig {
    /// Production configuration with the fixed raster dimensions.
    pub fn new(
        archive_path: PathBuf,
        extract_dir: PathBuf,
        base_image_path: PathBuf,
        snapshot_path: Option<PathBuf>,
    ) -> Self {
        Self {
            archive_path,
            extract_dir,
            base_image_path,
            snapshot_path,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            block_size: BLOCK_SIZE,
        }
    }

    /// Width of the rendered heatmap.
    pub fn out_width(&self) -> usize {
        self.grid_width / self.block_size
    }

    /// Height of the rendered heatmap.
    pub fn out_height(&self) -> usize {
        self.grid_height / self.block_size
    }
}
