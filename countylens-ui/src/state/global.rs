//! Global Application State
//!
//! Reactive state management using Leptos signals. The session viewport
//! lives here: the server returns a rewritten viewport with every update and
//! the client sends it back with the next one.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// State dropdown entries ("All USA" first)
    pub states: RwSignal<Vec<StateOption>>,
    /// Index metric dropdown entries
    pub indices: RwSignal<Vec<MetricOption>>,
    /// Outcome metric dropdown entries
    pub conditions: RwSignal<Vec<MetricOption>>,
    /// Current state dropdown value
    pub selected_state: RwSignal<String>,
    /// Current index metric key
    pub selected_index: RwSignal<String>,
    /// Current outcome metric key
    pub selected_outcome: RwSignal<String>,
    /// The session viewport, as last returned by the server
    pub viewport: RwSignal<Option<Viewport>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            states: create_rw_signal(Vec::new()),
            indices: create_rw_signal(Vec::new()),
            conditions: create_rw_signal(Vec::new()),
            selected_state: create_rw_signal(String::new()),
            selected_index: create_rw_signal(String::new()),
            selected_outcome: create_rw_signal(String::new()),
            viewport: create_rw_signal(None),
            loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }
}

/// Provide the global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

/// One entry of the state dropdown
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct StateOption {
    pub name: String,
    #[serde(default)]
    pub fips: Option<String>,
}

/// One entry of a metric dropdown
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MetricOption {
    pub key: String,
    pub label: String,
}

/// A geographic coordinate
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// The shared map viewport
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

/// Partial pan/zoom payload from a map interaction
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Relayout {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(default)]
    pub zoom: Option<f64>,
}
