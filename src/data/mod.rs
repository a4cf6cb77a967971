//! Dashboard Dataset
//!
//! One-time loading and joining of the two static inputs:
//!
//! - **geometry**: county GeoJSON with ids normalized to 5-digit FIPS
//! - **table**: county CSV with zero-padded FIPS join key
//! - **catalog**: static metric labels and state lookup tables
//!
//! Loading happens once at startup and is fatal on malformed input; after
//! that the [`Dataset`] is immutable and shared behind an `Arc`.

pub mod catalog;
pub mod geometry;
pub mod table;

pub use catalog::{
    state_center, state_fips_for_name, state_name, GeoPoint, MetricCatalog, MetricEntry,
    MetricGroup, ALL_USA, CONDITIONS, INDICES, USA_CENTER,
};
pub use geometry::{CountyFeature, CountyGeometry};
pub use table::{CountyRow, CountyTable};

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the dashboard data.
///
/// All of these are fatal: the process runs the load exactly once at startup
/// and has no recovery path.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GeoJSON {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read CSV {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("GeoJSON root is not a FeatureCollection")]
    NotFeatureCollection,

    #[error("GeoJSON feature {index} is missing STATE/COUNTY properties")]
    MissingFipsProperties { index: usize },

    #[error("malformed county FIPS join key {value:?}")]
    MalformedJoinKey { value: String },

    #[error("CSV is missing required column {name:?}")]
    MissingColumn { name: &'static str },

    #[error("no county joined between geometry and table")]
    EmptyJoin,
}

/// A state that actually occurs in the loaded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateEntry {
    pub fips: String,
    pub name: String,
}

/// The joined, immutable dashboard dataset.
#[derive(Debug)]
pub struct Dataset {
    geometry: CountyGeometry,
    table: CountyTable,
    catalog: MetricCatalog,
    states: Vec<StateEntry>,
}

impl Dataset {
    /// Load and join both inputs. Called once at startup; any error here
    /// prevents the server from starting.
    pub fn load(geojson_path: &Path, csv_path: &Path) -> Result<Self, DataError> {
        let geometry = CountyGeometry::load(geojson_path)?;
        tracing::info!(path = ?geojson_path, features = geometry.len(), "loaded county geometry");

        let table = CountyTable::load(csv_path)?;
        tracing::info!(path = ?csv_path, rows = table.len(), "loaded county table");

        Self::join(geometry, table)
    }

    /// Join already-loaded parts; used by `load` and by tests with
    /// in-memory fixtures.
    pub fn join(geometry: CountyGeometry, table: CountyTable) -> Result<Self, DataError> {
        let matched = table
            .rows()
            .iter()
            .filter(|row| geometry.contains(&row.fips))
            .count();

        if matched == 0 {
            return Err(DataError::EmptyJoin);
        }

        let unmatched = table.len() - matched;
        if unmatched > 0 {
            // Counties on only one side of the join are tolerated; they
            // simply never render.
            tracing::warn!(matched, unmatched, "county table rows without geometry");
        } else {
            tracing::info!(matched, "joined county table with geometry");
        }

        let present = table.state_fips_present();
        let mut states: Vec<StateEntry> = catalog::STATE_NAMES
            .iter()
            .filter(|(fips, _)| present.contains(fips))
            .map(|(fips, name)| StateEntry {
                fips: fips.to_string(),
                name: name.to_string(),
            })
            .collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            geometry,
            table,
            catalog: MetricCatalog::new(),
            states,
        })
    }

    /// Joined record for a normalized 5-digit county id.
    pub fn county(&self, fips: &str) -> Option<&CountyRow> {
        self.table.get(fips).filter(|row| self.geometry.contains(&row.fips))
    }

    /// Table rows restricted to one state, or all rows for `None`.
    pub fn rows_for(&self, state_fips: Option<&str>) -> Vec<&CountyRow> {
        self.table.rows_for(state_fips)
    }

    /// FeatureCollection restricted to one state, or everything for `None`.
    pub fn geometry_for(&self, state_fips: Option<&str>) -> Value {
        self.geometry.collection(state_fips)
    }

    /// States present in the data, sorted by name.
    pub fn states(&self) -> &[StateEntry] {
        &self.states
    }

    pub fn metric_catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    pub fn county_count(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared test fixtures: a two-state miniature of the real inputs.

    use super::*;
    use serde_json::json;

    pub const FIXTURE_CSV: &str = "\
COUNTY,PDI,NDI,SVI,NRI,phlth_crudeprev,mhlth_crudeprev
39049,0.62,0.55,0.71,88.2,11.9,16.3
39041,0.31,0.28,0.33,61.0,9.2,13.8
1001,0.48,0.52,0.58,72.5,13.4,17.9
";

    pub fn fixture_geojson() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"STATE": "39", "COUNTY": "049", "NAME": "Franklin"},
                    "geometry": {"type": "Polygon", "coordinates": [[[-83.2, 39.8], [-82.7, 39.8], [-82.7, 40.2], [-83.2, 39.8]]]}
                },
                {
                    "type": "Feature",
                    "properties": {"STATE": "39", "COUNTY": "041", "NAME": "Delaware"},
                    "geometry": {"type": "Polygon", "coordinates": [[[-83.2, 40.1], [-82.7, 40.1], [-82.7, 40.4], [-83.2, 40.1]]]}
                },
                {
                    "type": "Feature",
                    "properties": {"STATE": "01", "COUNTY": "001", "NAME": "Autauga"},
                    "geometry": {"type": "Polygon", "coordinates": [[[-86.9, 32.3], [-86.4, 32.3], [-86.4, 32.7], [-86.9, 32.3]]]}
                }
            ]
        })
    }

    pub fn fixture_dataset() -> Dataset {
        let dir = tempfile::tempdir().unwrap();
        let geojson_path = dir.path().join("counties.geojson");
        let csv_path = dir.path().join("counties.csv");
        std::fs::write(&geojson_path, fixture_geojson().to_string()).unwrap();
        std::fs::write(&csv_path, FIXTURE_CSV).unwrap();
        Dataset::load(&geojson_path, &csv_path).unwrap()
    }
}
