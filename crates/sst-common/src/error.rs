//! Error types for the sst-heatmap services.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for the heatmap pipeline.
///
/// Only fatal conditions are represented here. Degenerate inputs (a truncated
/// grid stream, a scalar outside the colormap domain) are defined outcomes
/// handled by ordinary return values, never by this enum.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Input errors ===
    #[error("Input stream unavailable: {0}")]
    StreamUnavailable(String),

    #[error("Failed to extract archive: {0}")]
    Decompression(String),

    // === Asset errors ===
    #[error("Base image asset missing or unreadable: {0}")]
    AssetMissing(String),

    // === Caller contract violations ===
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    // === Rendering/encoding errors ===
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    // === Infrastructure errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HeatmapError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            HeatmapError::StreamUnavailable(_) | HeatmapError::AssetMissing(_) => 503,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HeatmapError::StreamUnavailable("sst.grid".into()).http_status_code(),
            503
        );
        assert_eq!(
            HeatmapError::AssetMissing("empty-map.png".into()).http_status_code(),
            503
        );
        assert_eq!(
            HeatmapError::Encode("oops".into()).http_status_code(),
            500
        );
    }
}
