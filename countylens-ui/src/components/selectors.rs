//! Dropdown Selectors
//!
//! The three dashboard controls: state filter, index metric, outcome metric.
//! Each change posts an update cycle with the matching trigger, so the
//! server always knows which input fired.

use leptos::*;

use crate::app::run_update;
use crate::state::global::{GlobalState, MetricOption};

/// State filter dropdown ("All USA" plus every state present in the data)
#[component]
pub fn StateSelector() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let options = state.states;
    let selected = state.selected_state;

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        selected.set(value);
        let state = state.clone();
        spawn_local(async move {
            run_update(state, Some("state_changed"), None).await;
        });
    };

    view! {
        <div>
            <label class="control-label">"Select State:"</label>
            <select on:change=on_change>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = selected.get() == option.name;
                            view! {
                                <option value=option.name.clone() selected=is_selected>
                                    {option.name.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// One metric dropdown; used for both the index and the outcome selector
#[component]
pub fn MetricSelector(
    /// Control caption
    label: &'static str,
    /// Dropdown entries
    options: RwSignal<Vec<MetricOption>>,
    /// Selected metric key
    selected: RwSignal<String>,
    /// Update trigger this control fires
    trigger: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        selected.set(value);
        let state = state.clone();
        spawn_local(async move {
            run_update(state, Some(trigger), None).await;
        });
    };

    view! {
        <div class="metric-cell">
            <label class="control-label">{label}</label>
            <select on:change=on_change>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = selected.get() == option.key;
                            view! {
                                <option value=option.key.clone() selected=is_selected>
                                    {option.label.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
