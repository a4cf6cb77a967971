//! countylens dashboard
//!
//! Two synchronized county choropleth maps built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The server does the heavy lifting: it joins the data, reduces
//! viewport updates, and returns ready-made Plotly figure specs. The client
//! owns the session viewport, renders figures through the Plotly global, and
//! reports dropdown changes and map interactions back as update events.

use leptos::*;

mod api;
mod app;
mod components;
mod js_bridge;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
