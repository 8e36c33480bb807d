//! Archive extraction collaborator.
//!
//! The raw grid arrives as a gzip archive. Extraction must deterministically
//! produce the decodable grid file at a known path before the decoder runs;
//! any failure here is fatal to the pipeline.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use sst_common::{HeatmapError, HeatmapResult};
use tracing::{debug, info};

/// Decompress `archive` into `dest_dir`, returning the path of the grid file.
///
/// The output file name is the archive name minus its compression suffix
/// (`sst.grid.gz` extracts to `sst.grid`). If the output already exists the
/// extraction is skipped and the existing file is reused.
pub fn extract_archive(archive: &Path, dest_dir: &Path) -> HeatmapResult<PathBuf> {
    let file_name = archive
        .file_stem()
        .ok_or_else(|| {
            HeatmapError::StreamUnavailable(format!("bad archive name: {}", archive.display()))
        })?
        .to_owned();
    let out_path = dest_dir.join(&file_name);

    if out_path.exists() {
        debug!(path = %out_path.display(), "Grid file already extracted, reusing");
        return Ok(out_path);
    }

    std::fs::create_dir_all(dest_dir)
        .map_err(|e| HeatmapError::Decompression(format!("{}: {}", dest_dir.display(), e)))?;

    let input = File::open(archive).map_err(|e| {
        HeatmapError::StreamUnavailable(format!("{}: {}", archive.display(), e))
    })?;
    let mut decoder = GzDecoder::new(BufReader::new(input));

    // Extract to a temp name first so a failed run never leaves a partial
    // grid file at the final path.
    let tmp_path = dest_dir.join(format!("{}.partial", file_name.to_string_lossy()));
    let output = File::create(&tmp_path)
        .map_err(|e| HeatmapError::Decompression(format!("{}: {}", tmp_path.display(), e)))?;
    let mut writer = BufWriter::new(output);

    let bytes = io::copy(&mut decoder, &mut writer)
        .map_err(|e| HeatmapError::Decompression(format!("{}: {}", archive.display(), e)))?;

    std::fs::rename(&tmp_path, &out_path)
        .map_err(|e| HeatmapError::Decompression(format!("{}: {}", out_path.display(), e)))?;

    info!(
        archive = %archive.display(),
        output = %out_path.display(),
        bytes,
        "Extracted grid archive"
    );

    Ok(out_path)
}
