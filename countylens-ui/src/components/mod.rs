//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod map_panel;
pub mod selectors;

pub use loading::Loading;
pub use map_panel::MapPanel;
pub use selectors::{MetricSelector, StateSelector};
