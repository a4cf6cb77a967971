//! countylens server
//!
//! Loads the county dataset once and serves the dashboard.
//!
//! # Configuration
//!
//! Resolved in order: `--config` file, default config locations,
//! `COUNTYLENS_*` environment overrides, then the `--port` flag.
//!
//! - `COUNTYLENS_GEOJSON`: county polygon GeoJSON path
//! - `COUNTYLENS_CSV`: county metric table path
//! - `COUNTYLENS_HOST` / `COUNTYLENS_PORT`: listening address
//! - `COUNTYLENS_UI_DIST`: built UI bundle directory
//! - `RUST_LOG`: log filter (default: countylens=info,tower_http=debug)

use anyhow::Context;
use clap::Parser;
use countylens::api::{serve, ApiConfig, AppState};
use countylens::config::Config;
use countylens::data::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "countylens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synced county choropleth dashboard")]
struct Cli {
    /// Config file path (default: standard config locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listening port, overriding the config
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "countylens=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting countylens v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!(geojson = ?config.data.geojson_path, csv = ?config.data.csv_path, "loading dashboard data");

    // One-time load and join; malformed or missing inputs are fatal here
    let dataset = Arc::new(
        Dataset::load(&config.data.geojson_path, &config.data.csv_path)
            .context("loading dashboard data")?,
    );
    tracing::info!(
        counties = dataset.county_count(),
        states = dataset.states().len(),
        "dataset ready"
    );

    let api_config = ApiConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        ui_dist_dir: Some(config.server.ui_dist_dir.clone()),
    };

    if !config.server.ui_dist_dir.exists() {
        tracing::warn!(
            dist = ?config.server.ui_dist_dir,
            "UI bundle directory not found; only the JSON API will be served"
        );
    }

    // Run server
    let state = AppState::new(dataset, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("countylens stopped");
    Ok(())
}
