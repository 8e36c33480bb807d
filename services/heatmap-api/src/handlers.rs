//! HTTP request handlers.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, instrument};

use sst_common::HeatmapError;

use crate::pipeline::produce_heatmap;
use crate::state::AppState;

/// JSON payload for the base64-embeddable endpoint.
#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub image: String,
}

/// `GET /` and `GET /api/heatmap`: run the pipeline, return the PNG base64
/// encoded in a JSON envelope.
#[instrument(skip(state))]
pub async fn heatmap_json_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    match produce_heatmap(&state.config).await {
        Ok(png) => Json(HeatmapResponse {
            image: BASE64.encode(&png),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /heatmap.png`: same pipeline, raw PNG body.
#[instrument(skip(state))]
pub async fn heatmap_png_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    match produce_heatmap(&state.config).await {
        Ok(png) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "image/png")
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
            .body(png.into())
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => error_response(e),
    }
}

/// `GET /health`: liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Map a fatal pipeline error to an HTTP response. No partial image is ever
/// returned on failure.
fn error_response(err: HeatmapError) -> Response {
    error!(error = %err, "Pipeline run failed");
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}
