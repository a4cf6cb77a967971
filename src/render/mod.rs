//! Renderer
//!
//! Pure construction of the two choropleth figure specs. No state: every
//! update calls [`build_figure`] twice (index pane, outcome pane) with the
//! same rows, geometry, and viewport, differing only in the colored metric.

pub mod figure;

pub use figure::{ChoroplethTrace, Figure, Layout, MapLayout, Margin, Marker, Title};

use serde_json::Value;

use crate::data::CountyRow;
use crate::view::Viewport;

/// Continuous colorscale shared by both panes.
const COLORSCALE: &str = "Plasma";

/// Base-map style.
const MAP_STYLE: &str = "carto-positron";

/// Choropleth fill opacity over the base map.
const FILL_OPACITY: f64 = 0.7;

/// Which of the two synced panes a figure is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRole {
    Index,
    Outcome,
}

impl PaneRole {
    fn title_prefix(&self) -> &'static str {
        match self {
            PaneRole::Index => "Index Map",
            PaneRole::Outcome => "Outcome Map",
        }
    }
}

/// A metric key with its display label, borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct MetricRef<'a> {
    pub key: &'a str,
    pub label: &'a str,
}

/// Build one pane's figure from the filtered rows and geometry.
///
/// `index` and `outcome` are both carried in hover data on either pane;
/// `role` picks which one colors the counties.
pub fn build_figure(
    rows: &[&CountyRow],
    geometry: Value,
    role: PaneRole,
    index: MetricRef<'_>,
    outcome: MetricRef<'_>,
    viewport: Viewport,
) -> Figure {
    let colored = match role {
        PaneRole::Index => index,
        PaneRole::Outcome => outcome,
    };

    let locations: Vec<String> = rows.iter().map(|row| row.fips.clone()).collect();
    let z: Vec<Option<f64>> = rows.iter().map(|row| row.value(colored.key)).collect();
    let customdata: Vec<[Option<f64>; 2]> = rows
        .iter()
        .map(|row| [row.value(index.key), row.value(outcome.key)])
        .collect();

    let hovertemplate = format!(
        "%{{location}}<br>{}: %{{customdata[0]:.3f}}<br>{}: %{{customdata[1]:.2f}}<extra></extra>",
        hover_label(index.label),
        hover_label(outcome.label),
    );

    Figure {
        data: vec![ChoroplethTrace {
            trace_type: "choroplethmap",
            geojson: geometry,
            locations,
            z,
            colorscale: COLORSCALE,
            marker: Marker {
                opacity: FILL_OPACITY,
            },
            customdata,
            hovertemplate,
        }],
        layout: Layout {
            map: MapLayout {
                style: MAP_STYLE,
                center: viewport.center,
                zoom: viewport.zoom,
            },
            margin: Margin { l: 0, r: 0, t: 30, b: 0 },
            title: Title {
                text: format!("{}: {}", role.title_prefix(), hover_label(colored.label)),
            },
        },
    }
}

/// Catalog labels wrap long names with newlines for dropdowns; hover text
/// and titles want a single line.
fn hover_label(label: &str) -> String {
    label.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::fixture_dataset;
    use crate::view::StateFilter;

    const INDEX: MetricRef<'static> = MetricRef {
        key: "PDI",
        label: "Principled Deprivation Index",
    };
    const OUTCOME: MetricRef<'static> = MetricRef {
        key: "phlth_crudeprev",
        label: "Poor physical health",
    };

    #[test]
    fn test_figure_carries_colored_metric_and_viewport() {
        let dataset = fixture_dataset();
        let filter = StateFilter::State("39".to_string());
        let rows = dataset.rows_for(filter.fips());
        let viewport = filter.default_viewport();

        let figure = build_figure(
            &rows,
            dataset.geometry_for(filter.fips()),
            PaneRole::Index,
            INDEX,
            OUTCOME,
            viewport,
        );

        let trace = &figure.data[0];
        assert_eq!(trace.trace_type, "choroplethmap");
        assert_eq!(trace.colorscale, "Plasma");
        assert_eq!(trace.marker.opacity, 0.7);
        assert_eq!(trace.locations, vec!["39049", "39041"]);
        assert_eq!(trace.z, vec![Some(0.62), Some(0.31)]);
        assert_eq!(trace.geojson["features"].as_array().unwrap().len(), 2);

        assert_eq!(figure.layout.map.style, "carto-positron");
        assert_eq!(figure.layout.map.center, viewport.center);
        assert_eq!(figure.layout.map.zoom, viewport.zoom);
        assert_eq!(
            figure.layout.title.text,
            "Index Map: Principled Deprivation Index"
        );
    }

    #[test]
    fn test_outcome_pane_shares_data_but_colors_other_metric() {
        let dataset = fixture_dataset();
        let rows = dataset.rows_for(None);
        let viewport = Viewport::national();

        let figure = build_figure(
            &rows,
            dataset.geometry_for(None),
            PaneRole::Outcome,
            INDEX,
            OUTCOME,
            viewport,
        );

        let trace = &figure.data[0];
        assert_eq!(trace.z, vec![Some(11.9), Some(9.2), Some(13.4)]);
        // Hover carries both metrics on either pane
        assert_eq!(trace.customdata[0], [Some(0.62), Some(11.9)]);
        assert!(trace.hovertemplate.contains("Principled Deprivation Index"));
        assert!(trace.hovertemplate.contains("Poor physical health"));
        assert_eq!(figure.layout.title.text, "Outcome Map: Poor physical health");
    }

    #[test]
    fn test_missing_metric_renders_as_gap() {
        let dataset = fixture_dataset();
        let rows = dataset.rows_for(Some("01"));

        let figure = build_figure(
            &rows,
            dataset.geometry_for(Some("01")),
            PaneRole::Index,
            MetricRef { key: "no_such_column", label: "Nothing" },
            OUTCOME,
            Viewport::national(),
        );

        assert_eq!(figure.data[0].z, vec![None]);

        // null must survive serialization for Plotly to leave the gap
        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["data"][0]["z"][0].is_null());
    }
}
