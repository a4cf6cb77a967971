//! Loading Component

use leptos::*;

/// Inline loading note shown while an update cycle is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-note">"Loading…"</div>
    }
}
