//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::render::Figure;
use crate::view::{Relayout, UpdateTrigger, Viewport};

// ============================================
// BOOTSTRAP DTOs
// ============================================

/// Everything the client needs to build its controls and first render
#[derive(Debug, Serialize)]
pub struct BootstrapResponse {
    /// Dropdown entries, "All USA" first, then states sorted by name
    pub states: Vec<StateOption>,
    /// Index metric dropdown entries
    pub indices: Vec<MetricOption>,
    /// Outcome metric dropdown entries
    pub conditions: Vec<MetricOption>,
    /// Initial dropdown selection
    pub defaults: DefaultSelection,
    /// Initial shared viewport
    pub viewport: Viewport,
}

/// One entry of the state dropdown
#[derive(Debug, Serialize)]
pub struct StateOption {
    /// Display name, also the dropdown value
    pub name: String,
    /// 2-digit state FIPS; absent for "All USA"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fips: Option<String>,
}

/// One entry of a metric dropdown
#[derive(Debug, Serialize)]
pub struct MetricOption {
    /// CSV column key, the dropdown value
    pub key: String,
    /// Human-readable label
    pub label: String,
}

/// Initial dropdown selection
#[derive(Debug, Serialize)]
pub struct DefaultSelection {
    pub state: String,
    pub index: String,
    pub outcome: String,
}

// ============================================
// UPDATE DTOs
// ============================================

/// One update cycle: current selection plus what fired it
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Current dropdown values
    pub selection: SelectionDto,
    /// Which input fired; absent on the initial load
    #[serde(default)]
    pub trigger: Option<UpdateTrigger>,
    /// Pan/zoom payload when the trigger is a map interaction
    #[serde(default)]
    pub relayout: Option<Relayout>,
    /// The session's viewport before this update
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

/// Current dropdown values
#[derive(Debug, Deserialize)]
pub struct SelectionDto {
    /// State name or "All USA"
    pub state: String,
    /// Index metric key
    pub index: String,
    /// Outcome metric key
    pub outcome: String,
}

/// Both recomputed figures plus the rewritten session viewport
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub figure1: Figure,
    pub figure2: Figure,
    pub viewport: Viewport,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Counties in the loaded table
    pub counties: usize,
    /// States present in the data
    pub states: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
