//! Map Viewport
//!
//! The one piece of session state: the shared center/zoom both map panes
//! render at. The viewport is carried by the client and rewritten only by the
//! reducer, once per update cycle.

use serde::{Deserialize, Serialize};

use crate::data::{state_center, GeoPoint, USA_CENTER};

/// Zoom level when the whole country is shown.
pub const NATIONAL_ZOOM: f64 = 3.0;

/// Zoom level when a single state is selected.
pub const STATE_ZOOM: f64 = 4.0;

/// Shared map viewport: center coordinate plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Viewport {
    /// National default: USA center at zoom 3.
    pub fn national() -> Self {
        Self {
            center: USA_CENTER,
            zoom: NATIONAL_ZOOM,
        }
    }

    /// State default: the state's predefined center at zoom 4. A state FIPS
    /// without a center entry falls back to the national center.
    pub fn for_state(state_fips: &str) -> Self {
        Self {
            center: state_center(state_fips).unwrap_or(USA_CENTER),
            zoom: STATE_ZOOM,
        }
    }

    /// Overlay a partial pan/zoom payload; absent fields keep their value.
    pub fn apply(&self, relayout: &Relayout) -> Self {
        Self {
            center: relayout.center.unwrap_or(self.center),
            zoom: relayout.zoom.unwrap_or(self.zoom),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::national()
    }
}

/// Partial viewport change reported by a map interaction. Pan-only events
/// carry just the center, zoom-only events just the zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Relayout {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(default)]
    pub zoom: Option<f64>,
}
