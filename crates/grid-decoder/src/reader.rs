//! Async file reader feeding the decoder.

use std::path::Path;

use sst_common::{FullGrid, HeatmapError, HeatmapResult};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::GridDecoder;

/// Chunk size for streaming reads (64KB).
const CHUNK_SIZE: usize = 64 * 1024;

/// Read a raw grid file into a [`FullGrid`], streaming in 64 KiB chunks.
///
/// A missing or unreadable file is fatal ([`HeatmapError::StreamUnavailable`]).
/// A file shorter than `width * height` bytes is not: the remaining cells stay
/// zero per the truncation policy. Reading stops as soon as the grid is full.
pub async fn read_grid_file(
    path: impl AsRef<Path>,
    width: usize,
    height: usize,
) -> HeatmapResult<FullGrid> {
    let path = path.as_ref();
    let mut file = File::open(path).await.map_err(|e| {
        HeatmapError::StreamUnavailable(format!("{}: {}", path.display(), e))
    })?;

    let mut decoder = GridDecoder::new(width, height);
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total_read = 0u64;

    loop {
        let n = file.read(&mut buf).await.map_err(|e| {
            HeatmapError::StreamUnavailable(format!("{}: {}", path.display(), e))
        })?;
        if n == 0 {
            break;
        }
        total_read += n as u64;
        if decoder.push_chunk(&buf[..n]) {
            debug!(bytes = total_read, "Grid full, stopping read early");
            break;
        }
    }

    if decoder.bytes_filled() < width * height {
        info!(
            path = %path.display(),
            expected = width * height,
            got = decoder.bytes_filled(),
            "Grid file shorter than expected, remaining cells zero-filled"
        );
    }

    Ok(decoder.finish())
}
