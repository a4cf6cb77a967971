//! Figure Spec Types
//!
//! Typed subset of the Plotly figure schema the dashboard emits: one
//! `choroplethmap` trace plus the layout fields the maps need. Serialized
//! to JSON and handed to Plotly on the client untouched.

use serde::Serialize;
use serde_json::Value;

use crate::data::GeoPoint;

/// A complete figure: trace list plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

/// One county choropleth trace.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub geojson: Value,
    pub locations: Vec<String>,
    /// Colored metric value per location; `None` renders as a gap.
    pub z: Vec<Option<f64>>,
    pub colorscale: &'static str,
    pub marker: Marker,
    /// `[index value, outcome value]` per location, for hover.
    pub customdata: Vec<[Option<f64>; 2]>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub map: MapLayout,
    pub margin: Margin,
    pub title: Title,
}

/// The maplibre base-map sublayout; its `center`/`zoom` are what relayout
/// events report back as `map.center`/`map.zoom`.
#[derive(Debug, Clone, Serialize)]
pub struct MapLayout {
    pub style: &'static str,
    pub center: GeoPoint,
    pub zoom: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}
