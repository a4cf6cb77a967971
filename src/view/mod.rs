//! View State
//!
//! Session-scoped viewport state and the pure reducer that rewrites it.
//!
//! - **viewport**: the shared center/zoom both panes render at
//! - **reducer**: one update event in, next viewport out
//!
//! There is no process-wide store: the client carries the viewport and the
//! server returns the rewritten value with every update.

pub mod reducer;
pub mod viewport;

pub use reducer::{reduce, MapPane, StateFilter, UpdateTrigger};
pub use viewport::{Relayout, Viewport, NATIONAL_ZOOM, STATE_ZOOM};
