//! SST heatmap API service.
//!
//! HTTP server that turns the raw binary SST raster into a colorized PNG on
//! demand: archive extraction, streaming decode, block-mean downsampling,
//! colormap rendering over a base map, PNG encoding.

use anyhow::Result;
use axum::{extract::Extension, routing::get, Router};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use heatmap_api::config::PipelineConfig;
use heatmap_api::handlers;
use heatmap_api::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "heatmap-api")]
#[command(about = "SST heatmap rendering server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000", env = "LISTEN_ADDR")]
    listen: String,

    /// Compressed grid archive
    #[arg(long, default_value = "data/sst.grid.gz", env = "SST_ARCHIVE")]
    archive: PathBuf,

    /// Directory for extracted grid files
    #[arg(long, default_value = "data/extracted", env = "SST_EXTRACT_DIR")]
    extract_dir: PathBuf,

    /// Base map image (must match the heatmap dimensions)
    #[arg(long, default_value = "assets/empty-map.png", env = "BASE_IMAGE")]
    base_image: PathBuf,

    /// Optional path to persist each rendered PNG to
    #[arg(long, env = "SNAPSHOT_PATH")]
    snapshot: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SST heatmap API server");

    let config = PipelineConfig::new(
        args.archive,
        args.extract_dir,
        args.base_image,
        args.snapshot,
    );
    let state = Arc::new(AppState::new(config));

    // Build router
    let app = Router::new()
        .route("/", get(handlers::heatmap_json_handler))
        .route("/api/heatmap", get(handlers::heatmap_json_handler))
        .route("/heatmap.png", get(handlers::heatmap_png_handler))
        .route("/health", get(handlers::health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
