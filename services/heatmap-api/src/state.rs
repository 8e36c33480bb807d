//! Application state and shared resources.

use crate::config::PipelineConfig;

/// Shared application state.
///
/// Holds only immutable configuration: every request allocates its own grid
/// and canvas, so there is nothing mutable to share across requests.
pub struct AppState {
    pub config: PipelineConfig,
}

impl AppState {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }
}
