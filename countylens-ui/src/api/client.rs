//! HTTP API Client
//!
//! Functions for communicating with the countylens REST API.

use gloo_net::http::Request;

use crate::state::global::{MetricOption, Relayout, StateOption, Viewport};

/// Default API base URL; the server serves this bundle, so same-origin works
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("countylens_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("countylens_api_url", url);
        }
    }
}

// ============ Request/Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct BootstrapResponse {
    pub states: Vec<StateOption>,
    pub indices: Vec<MetricOption>,
    pub conditions: Vec<MetricOption>,
    pub defaults: DefaultSelection,
    pub viewport: Viewport,
}

#[derive(Debug, serde::Deserialize)]
pub struct DefaultSelection {
    pub state: String,
    pub index: String,
    pub outcome: String,
}

#[derive(Debug, serde::Serialize)]
pub struct UpdateRequest {
    pub selection: Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relayout: Option<Relayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

#[derive(Debug, serde::Serialize)]
pub struct Selection {
    pub state: String,
    pub index: String,
    pub outcome: String,
}

/// Figures stay untyped: they are handed to Plotly verbatim
#[derive(Debug, serde::Deserialize)]
pub struct UpdateResponse {
    pub figure1: serde_json::Value,
    pub figure2: serde_json::Value,
    pub viewport: Viewport,
}

// ============ API Functions ============

/// Fetch dropdown catalogs, defaults, and the initial viewport
pub async fn fetch_bootstrap() -> Result<BootstrapResponse, String> {
    let url = format!("{}/bootstrap", get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Bootstrap request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Bootstrap failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Bootstrap response invalid: {}", e))
}

/// Post one update cycle; returns both figures and the rewritten viewport
pub async fn post_update(request: &UpdateRequest) -> Result<UpdateResponse, String> {
    let url = format!("{}/update", get_api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Update request invalid: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Update request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Update failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Update response invalid: {}", e))
}
