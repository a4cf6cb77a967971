//! App Root Component
//!
//! The single dashboard page: one state dropdown, two metric dropdowns, two
//! synced map panes. All reactivity funnels through [`run_update`], which
//! posts exactly one trigger per cycle and re-renders both panes at the
//! viewport the server returns.

use leptos::*;

use crate::api::{self, Selection, UpdateRequest};
use crate::components::{Loading, MapPanel, MetricSelector, StateSelector};
use crate::js_bridge;
use crate::state::global::{provide_global_state, GlobalState, Relayout};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    js_bridge::init_relayout_queue();

    // Initial load: catalogs, defaults, then the first pair of figures
    {
        let state = state.clone();
        create_effect(move |_| {
            let state = state.clone();
            spawn_local(async move {
                bootstrap(state).await;
            });
        });
    }

    // Map interactions arrive through the JS relayout queue
    {
        let state = state.clone();
        let poll = gloo_timers::callback::Interval::new(200, move || {
            // Last writer wins when both maps fired within one tick
            if let Some(event) = js_bridge::drain_relayout().pop() {
                let trigger = if event.pane == 1 {
                    "map1_interacted"
                } else {
                    "map2_interacted"
                };
                let relayout = Relayout {
                    center: event.center,
                    zoom: event.zoom,
                };
                let state = state.clone();
                spawn_local(async move {
                    run_update(state, Some(trigger), Some(relayout)).await;
                });
            }
        });
        poll.forget();
    }

    let indices = state.indices;
    let conditions = state.conditions;
    let selected_index = state.selected_index;
    let selected_outcome = state.selected_outcome;
    let error = state.error;
    let loading = state.loading;

    view! {
        <div class="app">
            <h1>"Index:Condition Synced County Choropleth Maps"</h1>

            {move || {
                error.get().map(|message| {
                    view! { <div class="error-banner">{message}</div> }
                })
            }}

            <div class="state-row">
                <StateSelector />
            </div>

            <div class="metric-row">
                <MetricSelector
                    label="Select Index:"
                    options=indices
                    selected=selected_index
                    trigger="index_changed"
                />
                <MetricSelector
                    label="Select Outcome:"
                    options=conditions
                    selected=selected_outcome
                    trigger="outcome_changed"
                />
            </div>

            <div class="maps-row">
                <MapPanel container_id="map1" />
                <MapPanel container_id="map2" />
            </div>

            {move || loading.get().then(|| view! { <Loading /> })}
        </div>
    }
}

/// Fetch the catalogs and defaults, then run the initial update cycle.
async fn bootstrap(state: GlobalState) {
    state.loading.set(true);

    match api::fetch_bootstrap().await {
        Ok(response) => {
            state.selected_state.set(response.defaults.state);
            state.selected_index.set(response.defaults.index);
            state.selected_outcome.set(response.defaults.outcome);
            state.states.set(response.states);
            state.indices.set(response.indices);
            state.conditions.set(response.conditions);
            state.viewport.set(Some(response.viewport));

            // First render: no trigger, so the server uses the default viewport
            run_update(state, None, None).await;
        }
        Err(e) => {
            state.error.set(Some(e));
            state.loading.set(false);
        }
    }
}

/// Run one update cycle: post the current selection plus what fired, then
/// render both returned figures and keep the rewritten session viewport.
pub(crate) async fn run_update(
    state: GlobalState,
    trigger: Option<&'static str>,
    relayout: Option<Relayout>,
) {
    state.loading.set(true);

    let request = UpdateRequest {
        selection: Selection {
            state: state.selected_state.get_untracked(),
            index: state.selected_index.get_untracked(),
            outcome: state.selected_outcome.get_untracked(),
        },
        trigger: trigger.map(|t| t.to_string()),
        relayout,
        viewport: state.viewport.get_untracked(),
    };

    match api::post_update(&request).await {
        Ok(response) => {
            state.viewport.set(Some(response.viewport));
            js_bridge::render_map("map1", 1, &response.figure1.to_string());
            js_bridge::render_map("map2", 2, &response.figure2.to_string());
            state.error.set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Update failed: {}", e).into());
            state.error.set(Some(e));
        }
    }

    state.loading.set(false);
}
