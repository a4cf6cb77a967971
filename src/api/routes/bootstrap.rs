//! Bootstrap Route
//!
//! - GET /api/v1/bootstrap - dropdown catalogs, defaults, initial viewport
//!
//! Served once per page load; everything in it is static for the lifetime of
//! the process.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{BootstrapResponse, DefaultSelection, MetricOption, StateOption};
use crate::api::state::AppState;
use crate::data::{ALL_USA, CONDITIONS, INDICES};
use crate::view::Viewport;

/// Default index metric on first load.
const DEFAULT_INDEX: &str = "PDI";

/// Default outcome metric on first load.
const DEFAULT_OUTCOME: &str = "phlth_crudeprev";

/// GET /api/v1/bootstrap
pub async fn bootstrap(State(state): State<Arc<AppState>>) -> Json<BootstrapResponse> {
    let mut states = vec![StateOption {
        name: ALL_USA.to_string(),
        fips: None,
    }];
    states.extend(state.dataset.states().iter().map(|entry| StateOption {
        name: entry.name.clone(),
        fips: Some(entry.fips.clone()),
    }));

    Json(BootstrapResponse {
        states,
        indices: metric_options(INDICES),
        conditions: metric_options(CONDITIONS),
        defaults: DefaultSelection {
            state: ALL_USA.to_string(),
            index: DEFAULT_INDEX.to_string(),
            outcome: DEFAULT_OUTCOME.to_string(),
        },
        viewport: Viewport::national(),
    })
}

fn metric_options(entries: &[crate::data::MetricEntry]) -> Vec<MetricOption> {
    entries
        .iter()
        .map(|entry| MetricOption {
            key: entry.key.to_string(),
            label: entry.label.to_string(),
        })
        .collect()
}
