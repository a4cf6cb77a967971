//! Update Route
//!
//! - POST /api/v1/update - recompute both figures and the shared viewport
//!
//! The single reactive unit of the dashboard: the client posts its current
//! selection, which input fired, an optional relayout payload, and its prior
//! viewport; the response carries both figure specs and the rewritten
//! viewport for the session.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SelectionDto, UpdateRequest, UpdateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::data::MetricGroup;
use crate::render::{build_figure, MetricRef, PaneRole};
use crate::view::{reduce, StateFilter};

/// POST /api/v1/update
pub async fn update_maps(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let dataset = &state.dataset;
    let (filter, index, outcome) = validate_selection(&state, &req.selection)?;

    let viewport = reduce(&filter, req.trigger, req.relayout.as_ref(), req.viewport);

    let rows = dataset.rows_for(filter.fips());
    let geometry = dataset.geometry_for(filter.fips());

    tracing::debug!(
        state = %req.selection.state,
        trigger = ?req.trigger,
        counties = rows.len(),
        zoom = viewport.zoom,
        "recomputing figures"
    );

    let figure1 = build_figure(
        &rows,
        geometry.clone(),
        PaneRole::Index,
        index,
        outcome,
        viewport,
    );
    let figure2 = build_figure(&rows, geometry, PaneRole::Outcome, index, outcome, viewport);

    Ok(Json(UpdateResponse {
        figure1,
        figure2,
        viewport,
    }))
}

/// Resolve the dropdown values against the catalogs, rejecting anything the
/// dropdowns could not have produced.
fn validate_selection<'a>(
    state: &AppState,
    selection: &'a SelectionDto,
) -> ApiResult<(StateFilter, MetricRef<'a>, MetricRef<'a>)> {
    let filter = StateFilter::from_name(&selection.state).ok_or_else(|| {
        ApiError::Validation(format!("Unknown state {:?}", selection.state))
    })?;

    let catalog = state.dataset.metric_catalog();

    let index = metric_ref(catalog, &selection.index, MetricGroup::Index)?;
    let outcome = metric_ref(catalog, &selection.outcome, MetricGroup::Condition)?;

    Ok((filter, index, outcome))
}

fn metric_ref<'a>(
    catalog: &crate::data::MetricCatalog,
    key: &'a str,
    expected: MetricGroup,
) -> ApiResult<MetricRef<'a>> {
    match (catalog.label(key), catalog.group(key)) {
        (Some(label), Some(group)) if group == expected => Ok(MetricRef { key, label }),
        (Some(_), Some(_)) => Err(ApiError::Validation(format!(
            "Metric {:?} is not valid for this dropdown",
            key
        ))),
        _ => Err(ApiError::Validation(format!("Unknown metric {:?}", key))),
    }
}
