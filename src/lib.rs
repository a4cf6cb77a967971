//! # countylens
//!
//! Synced county choropleth dashboard: two maps side by side comparing a
//! deprivation/risk index against a health-outcome prevalence, filterable by
//! state, with both panes locked to one shared viewport.
//!
//! ## Modules
//!
//! - [`data`]: one-time GeoJSON + CSV loading and the FIPS join
//! - [`view`]: session viewport state and the update reducer
//! - [`render`]: figure spec construction for both panes
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use countylens::api::{serve, ApiConfig, AppState};
//! use countylens::data::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load and join the inputs once; any failure here is fatal
//!     let dataset = Arc::new(Dataset::load(
//!         Path::new("data/geojson-counties-fips.json"),
//!         Path::new("data/county_results.csv"),
//!     )?);
//!
//!     // Serve the dashboard
//!     let config = ApiConfig::default();
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod render;
pub mod view;

// Re-export top-level types for convenience
pub use data::{DataError, Dataset, GeoPoint, MetricCatalog, StateEntry};

pub use view::{reduce, MapPane, Relayout, StateFilter, UpdateTrigger, Viewport};

pub use render::{build_figure, Figure, MetricRef, PaneRole};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
