//! Map Panel
//!
//! One choropleth pane. The div is a mount point for Plotly; rendering and
//! relayout wiring happen in the JS bridge once a figure arrives.

use leptos::*;

/// A single map container
#[component]
pub fn MapPanel(
    /// DOM id the JS bridge renders into ("map1" or "map2")
    container_id: &'static str,
) -> impl IntoView {
    view! {
        <div class="map-panel">
            <div id=container_id class="map-container"></div>
        </div>
    }
}
