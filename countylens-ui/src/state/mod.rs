//! State Management
//!
//! Global reactive application state.

pub mod global;

pub use global::{
    provide_global_state, GeoPoint, GlobalState, MetricOption, Relayout, StateOption, Viewport,
};
