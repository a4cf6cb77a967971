//! API Layer
//!
//! HTTP client for the countylens REST API.

pub mod client;

pub use client::{
    fetch_bootstrap, get_api_base, post_update, set_api_base, BootstrapResponse,
    DefaultSelection, Selection, UpdateRequest, UpdateResponse,
};
