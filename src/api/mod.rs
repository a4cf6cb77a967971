//! Dashboard REST API
//!
//! HTTP layer for the county dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /api/v1/bootstrap` - Dropdown catalogs, defaults, initial viewport
//! - `POST /api/v1/update` - Recompute both figures and the shared viewport
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## UI
//! - `/` - The built `countylens-ui` bundle, when a dist directory is
//!   configured
//!
//! # Example
//!
//! ```rust,ignore
//! use countylens::api::{serve, ApiConfig, AppState};
//! use countylens::data::Dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load(
//!         Path::new("data/counties.geojson"),
//!         Path::new("data/county_results.csv"),
//!     )?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/bootstrap", get(routes::bootstrap::bootstrap))
        .route("/update", post(routes::update::update_maps));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let ui_dist_dir = state.config.ui_dist_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .with_state(shared_state);

    // Serve the built UI bundle at the root, when present
    if let Some(dist) = ui_dist_dir {
        router = router.fallback_service(ServeDir::new(dist));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::fixture_dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Arc::new(fixture_dataset());
        let config = ApiConfig {
            ui_dist_dir: None,
            ..ApiConfig::default()
        };

        let state = AppState::new(dataset, config);
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_update(app: Router, body: Value) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/update")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["counties"], 3);
        assert_eq!(body["states"], 2);
    }

    #[tokio::test]
    async fn test_bootstrap_catalogs() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/bootstrap")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        // "All USA" first, then only the states present in the fixture
        let states: Vec<&str> = body["states"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(states, vec!["All USA", "Alabama", "Ohio"]);

        assert_eq!(body["indices"].as_array().unwrap().len(), 4);
        assert_eq!(body["conditions"].as_array().unwrap().len(), 21);
        assert_eq!(body["defaults"]["index"], "PDI");
        assert_eq!(body["defaults"]["outcome"], "phlth_crudeprev");
        assert_eq!(body["viewport"]["zoom"], 3.0);
        assert_eq!(body["viewport"]["center"]["lat"], 37.0902);
    }

    #[tokio::test]
    async fn test_update_state_selection_resets_viewport() {
        let app = create_test_app();

        let response = post_update(
            app,
            json!({
                "selection": {"state": "Ohio", "index": "PDI", "outcome": "phlth_crudeprev"},
                "trigger": "state_changed",
                "viewport": {"center": {"lat": 10.0, "lon": 20.0}, "zoom": 9.0}
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["viewport"]["center"]["lat"], 40.2521);
        assert_eq!(body["viewport"]["center"]["lon"], -83.6197);
        assert_eq!(body["viewport"]["zoom"], 4.0);

        // Only Ohio counties in both panes
        let locations = body["figure1"]["data"][0]["locations"].as_array().unwrap();
        assert_eq!(locations.len(), 2);
        assert!(locations
            .iter()
            .all(|l| l.as_str().unwrap().starts_with("39")));
        assert_eq!(
            body["figure1"]["data"][0]["locations"],
            body["figure2"]["data"][0]["locations"]
        );
    }

    #[tokio::test]
    async fn test_update_metric_change_keeps_viewport() {
        let app = create_test_app();

        let response = post_update(
            app,
            json!({
                "selection": {"state": "Ohio", "index": "SVI", "outcome": "phlth_crudeprev"},
                "trigger": "index_changed",
                "viewport": {"center": {"lat": 41.1, "lon": -81.9}, "zoom": 6.5}
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["viewport"]["center"]["lat"], 41.1);
        assert_eq!(body["viewport"]["center"]["lon"], -81.9);
        assert_eq!(body["viewport"]["zoom"], 6.5);
    }

    #[tokio::test]
    async fn test_update_map_interaction_syncs_both_panes() {
        let app = create_test_app();

        let response = post_update(
            app,
            json!({
                "selection": {"state": "All USA", "index": "PDI", "outcome": "phlth_crudeprev"},
                "trigger": "map2_interacted",
                "relayout": {"center": {"lat": 35.0, "lon": -90.0}, "zoom": 5.5},
                "viewport": {"center": {"lat": 37.0902, "lon": -95.7129}, "zoom": 3.0}
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        // Both figures render at the interacted pane's viewport
        for figure in ["figure1", "figure2"] {
            assert_eq!(body[figure]["layout"]["map"]["center"]["lat"], 35.0);
            assert_eq!(body[figure]["layout"]["map"]["center"]["lon"], -90.0);
            assert_eq!(body[figure]["layout"]["map"]["zoom"], 5.5);
        }
        assert_eq!(body["viewport"]["zoom"], 5.5);
    }

    #[tokio::test]
    async fn test_update_unknown_state_rejected() {
        let app = create_test_app();

        let response = post_update(
            app,
            json!({
                "selection": {"state": "Atlantis", "index": "PDI", "outcome": "phlth_crudeprev"}
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_update_metric_group_enforced() {
        let app = create_test_app();

        // An outcome key is not a valid index selection
        let response = post_update(
            app,
            json!({
                "selection": {"state": "All USA", "index": "phlth_crudeprev", "outcome": "phlth_crudeprev"}
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/update")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
