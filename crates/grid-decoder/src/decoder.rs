//! Chunk-by-chunk decoder state machine.

use sst_common::FullGrid;

/// Incremental decoder for the row-major byte raster.
///
/// Maintains a (row, col) cursor pair across chunk boundaries. Feeding the
/// same byte sequence in any chunking produces an identical grid.
///
/// Truncation policy: a stream that ends before filling the grid leaves the
/// undelivered cells at their zero-initialized value; bytes beyond the grid
/// capacity are discarded. Neither case is an error.
#[derive(Debug)]
pub struct GridDecoder {
    grid: FullGrid,
    row: usize,
    col: usize,
}

impl GridDecoder {
    /// Create a decoder for a grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: FullGrid::zeroed(width, height),
            row: 0,
            col: 0,
        }
    }

    /// Feed one chunk of the input stream.
    ///
    /// Returns `true` once the grid is full; callers may stop reading at that
    /// point. Excess bytes in this or later chunks are ignored.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> bool {
        for &byte in chunk {
            if self.col >= self.grid.width() {
                self.col = 0;
                self.row += 1;
            }
            if self.row >= self.grid.height() {
                break;
            }
            self.grid.set(self.col, self.row, byte);
            self.col += 1;
        }
        self.is_full()
    }

    /// Whether every cell of the grid has been delivered.
    pub fn is_full(&self) -> bool {
        self.row >= self.grid.height()
            || (self.row + 1 == self.grid.height() && self.col >= self.grid.width())
    }

    /// Number of bytes consumed into cells so far.
    pub fn bytes_filled(&self) -> usize {
        if self.row >= self.grid.height() {
            self.grid.width() * self.grid.height()
        } else {
            self.row * self.grid.width() + self.col
        }
    }

    /// Consume the decoder and return the grid.
    ///
    /// No partial results are exposed mid-stream; this is the only way to get
    /// at the decoded matrix.
    pub fn finish(self) -> FullGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_bytes(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_single_chunk_fills_grid() {
        let mut decoder = GridDecoder::new(4, 3);
        let full = decoder.push_chunk(&sequential_bytes(12));
        assert!(full);

        let grid = decoder.finish();
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(3, 0), Some(3));
        assert_eq!(grid.get(0, 1), Some(4));
        assert_eq!(grid.get(3, 2), Some(11));
    }

    #[test]
    fn test_chunk_size_independence() {
        let bytes = sequential_bytes(64);

        let mut all_at_once = GridDecoder::new(8, 8);
        all_at_once.push_chunk(&bytes);

        let mut one_at_a_time = GridDecoder::new(8, 8);
        for b in &bytes {
            one_at_a_time.push_chunk(std::slice::from_ref(b));
        }

        let mut odd_chunks = GridDecoder::new(8, 8);
        for chunk in bytes.chunks(7) {
            odd_chunks.push_chunk(chunk);
        }

        let reference = all_at_once.finish();
        assert_eq!(one_at_a_time.finish(), reference);
        assert_eq!(odd_chunks.finish(), reference);
    }

    #[test]
    fn test_short_stream_leaves_zeros() {
        let mut decoder = GridDecoder::new(4, 4);
        let full = decoder.push_chunk(&[9, 9, 9, 9, 9]);
        assert!(!full);
        assert_eq!(decoder.bytes_filled(), 5);

        let grid = decoder.finish();
        assert_eq!(grid.get(0, 1), Some(9));
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.get(3, 3), Some(0));
    }

    #[test]
    fn test_excess_bytes_are_discarded() {
        let mut decoder = GridDecoder::new(2, 2);
        let full = decoder.push_chunk(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(full);
        assert_eq!(decoder.bytes_filled(), 4);

        // Later chunks are ignored too.
        decoder.push_chunk(&[99]);

        let grid = decoder.finish();
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(1, 1), Some(4));
    }

    #[test]
    fn test_cursor_crosses_chunk_boundary_mid_row() {
        let mut decoder = GridDecoder::new(3, 2);
        decoder.push_chunk(&[1, 2]);
        decoder.push_chunk(&[3, 4]);
        decoder.push_chunk(&[5, 6]);

        let grid = decoder.finish();
        assert_eq!(grid.get(2, 0), Some(3));
        assert_eq!(grid.get(0, 1), Some(4));
        assert_eq!(grid.get(2, 1), Some(6));
    }

    #[test]
    fn test_empty_chunk_is_noop() {
        let mut decoder = GridDecoder::new(2, 2);
        decoder.push_chunk(&[1]);
        decoder.push_chunk(&[]);
        decoder.push_chunk(&[2]);
        assert_eq!(decoder.bytes_filled(), 2);
    }
}
