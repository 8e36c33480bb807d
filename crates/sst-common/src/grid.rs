//! Grid containers for the heatmap pipeline.
//!
//! `FullGrid` holds the raw decoded byte raster at native resolution;
//! `ReducedGrid` holds the block-averaged values handed to the renderer.
//! Both are plain row-major buffers; ownership transfers stage to stage
//! through the pipeline, so neither is ever mutated after construction
//! completes.

/// The full-resolution byte raster (one unsigned byte per cell).
///
/// Zero-initialized on creation: a source stream that ends early leaves the
/// undelivered cells at 0 by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl FullGrid {
    /// Create a zeroed grid of the given dimensions.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            data: vec![0u8; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at a grid coordinate, if in bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<u8> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Write a cell value. Out-of-bounds writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, value: u8) {
        if col < self.width && row < self.height {
            self.data[row * self.width + col] = value;
        }
    }

    /// Raw row-major cell data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The downsampled grid of block averages.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedGrid {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl ReducedGrid {
    /// Create a reduced grid from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "reduced grid shape mismatch");
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at a grid coordinate, if in bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Raw row-major cell data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
