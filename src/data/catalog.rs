//! Metric and State Catalogs
//!
//! Static lookup tables used across the dashboard:
//!
//! - Metric keys and their display labels (deprivation indices and
//!   health-outcome prevalences)
//! - State FIPS ↔ state name mapping (50 states + DC)
//! - Predefined map center coordinate per state
//!
//! All tables are read-only and baked into the binary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dropdown value that selects the whole country instead of one state.
pub const ALL_USA: &str = "All USA";

/// A geographic coordinate (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Default map center for the whole country.
pub const USA_CENTER: GeoPoint = GeoPoint {
    lat: 37.0902,
    lon: -95.7129,
};

/// One selectable metric: CSV column key plus human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// Deprivation/risk indices (left map).
pub const INDICES: &[MetricEntry] = &[
    MetricEntry { key: "PDI", label: "Principled Deprivation Index" },
    MetricEntry { key: "NDI", label: "Neighborhood Deprivation Index" },
    MetricEntry { key: "SVI", label: "Social Vulnerability Index" },
    MetricEntry { key: "NRI", label: "National Risk Index Score" },
];

/// Health-outcome crude prevalences (right map).
pub const CONDITIONS: &[MetricEntry] = &[
    MetricEntry { key: "mhlth_crudeprev", label: "Poor mental health" },
    MetricEntry { key: "cognition_crudeprev", label: "Cognitive disability" },
    MetricEntry { key: "pct_disabled", label: "Disability" },
    MetricEntry { key: "mobility_crudeprev", label: "Mobility disability" },
    MetricEntry { key: "selfcare_crudeprev", label: "Self-care disability" },
    MetricEntry { key: "indeplive_crudeprev", label: "Independent living\ndisability" },
    MetricEntry { key: "hearing_crudeprev", label: "Hearing disability" },
    MetricEntry { key: "vision_crudeprev", label: "Vision disability" },
    MetricEntry { key: "phlth_crudeprev", label: "Poor physical health" },
    MetricEntry { key: "ghlth_crudeprev", label: "Poor self-rated health" },
    MetricEntry { key: "diabetes_crudeprev", label: "Diabetes" },
    MetricEntry { key: "stroke_crudeprev", label: "Stroke" },
    MetricEntry { key: "bphigh_crudeprev", label: "High blood pressure" },
    MetricEntry { key: "copd_crudeprev", label: "Chronic obstructive\npulmonary disease" },
    MetricEntry { key: "arthritis_crudeprev", label: "Arthritis" },
    MetricEntry { key: "obesity_crudeprev", label: "Obesity" },
    MetricEntry { key: "teethlost_crudeprev", label: "All teeth lost" },
    MetricEntry { key: "highchol_crudeprev", label: "High cholesterol" },
    MetricEntry { key: "casthma_crudeprev", label: "Asthma" },
    MetricEntry { key: "cancer_crudeprev", label: "Cancer (non-skin)\nor melanoma" },
    MetricEntry { key: "chd_crudeprev", label: "Coronary heart disease" },
];

/// Which dropdown a metric key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    Index,
    Condition,
}

/// Lookup over all selectable metrics.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    labels: HashMap<&'static str, (&'static str, MetricGroup)>,
}

impl MetricCatalog {
    pub fn new() -> Self {
        let mut labels = HashMap::new();
        for entry in INDICES {
            labels.insert(entry.key, (entry.label, MetricGroup::Index));
        }
        for entry in CONDITIONS {
            labels.insert(entry.key, (entry.label, MetricGroup::Condition));
        }
        Self { labels }
    }

    /// Display label for a metric key, if the key is known.
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.labels.get(key).map(|(label, _)| *label)
    }

    /// Which dropdown group a metric key belongs to.
    pub fn group(&self, key: &str) -> Option<MetricGroup> {
        self.labels.get(key).map(|(_, group)| *group)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// State FIPS → state name, every state with a county FIPS prefix.
pub const STATE_NAMES: &[(&str, &str)] = &[
    ("01", "Alabama"),
    ("02", "Alaska"),
    ("04", "Arizona"),
    ("05", "Arkansas"),
    ("06", "California"),
    ("08", "Colorado"),
    ("09", "Connecticut"),
    ("10", "Delaware"),
    ("11", "District of Columbia"),
    ("12", "Florida"),
    ("13", "Georgia"),
    ("15", "Hawaii"),
    ("16", "Idaho"),
    ("17", "Illinois"),
    ("18", "Indiana"),
    ("19", "Iowa"),
    ("20", "Kansas"),
    ("21", "Kentucky"),
    ("22", "Louisiana"),
    ("23", "Maine"),
    ("24", "Maryland"),
    ("25", "Massachusetts"),
    ("26", "Michigan"),
    ("27", "Minnesota"),
    ("28", "Mississippi"),
    ("29", "Missouri"),
    ("30", "Montana"),
    ("31", "Nebraska"),
    ("32", "Nevada"),
    ("33", "New Hampshire"),
    ("34", "New Jersey"),
    ("35", "New Mexico"),
    ("36", "New York"),
    ("37", "North Carolina"),
    ("38", "North Dakota"),
    ("39", "Ohio"),
    ("40", "Oklahoma"),
    ("41", "Oregon"),
    ("42", "Pennsylvania"),
    ("44", "Rhode Island"),
    ("45", "South Carolina"),
    ("46", "South Dakota"),
    ("47", "Tennessee"),
    ("48", "Texas"),
    ("49", "Utah"),
    ("50", "Vermont"),
    ("51", "Virginia"),
    ("53", "Washington"),
    ("54", "West Virginia"),
    ("55", "Wisconsin"),
    ("56", "Wyoming"),
];

/// State FIPS → predefined map center (lat, lon).
pub const STATE_CENTERS: &[(&str, f64, f64)] = &[
    ("01", 32.806671, -86.791130),
    ("02", 61.370716, -152.404419),
    ("04", 33.729759, -111.431221),
    ("05", 34.969704, -92.373123),
    ("06", 36.116203, -119.681564),
    ("08", 39.059811, -105.311104),
    ("09", 41.597782, -72.755371),
    ("10", 38.910532, -75.528012),
    ("11", 38.899348, -77.014567),
    ("12", 27.766279, -82.776462),
    ("13", 33.247875, -83.441162),
    ("15", 20.7167, -157.75),
    ("16", 44.2405, -114.4788),
    ("17", 40.6331, -89.3985),
    ("18", 39.8494, -86.2583),
    ("19", 42.0052, -93.6318),
    ("20", 38.5266, -96.7265),
    ("21", 37.8393, -84.2700),
    ("22", 30.9843, -91.9623),
    ("23", 45.2538, -69.4455),
    ("24", 39.0639, -76.8021),
    ("25", 42.2302, -71.5301),
    ("26", 44.3467, -85.4102),
    ("27", 46.3971, -94.6362),
    ("28", 32.7416, -89.6787),
    ("29", 38.5739, -92.6038),
    ("30", 46.8797, -110.3626),
    ("31", 41.4925, -99.9018),
    ("32", 38.3135, -117.0554),
    ("33", 43.8041, -71.1108),
    ("34", 40.2989, -74.5210),
    ("35", 34.8405, -106.2485),
    ("36", 42.9595, -75.5267),
    ("37", 35.6301, -79.8064),
    ("38", 47.5515, -101.0020),
    ("39", 40.2521, -83.6197),
    ("40", 35.5653, -96.9289),
    ("41", 44.5720, -122.0709),
    ("42", 41.2033, -77.1945),
    ("44", 41.6809, -71.5118),
    ("45", 33.6874, -80.4551),
    ("46", 43.9695, -99.9018),
    ("47", 35.7478, -86.6923),
    ("48", 31.0545, -97.5635),
    ("49", 39.4192, -111.9507),
    ("50", 44.0459, -72.7107),
    ("51", 37.5042, -78.4890),
    ("53", 47.4006, -121.4908),
    ("54", 38.4680, -80.9999),
    ("55", 44.2685, -89.8164),
    ("56", 42.9958, -107.5512),
];

/// State name for a 2-digit state FIPS code.
pub fn state_name(fips: &str) -> Option<&'static str> {
    STATE_NAMES
        .iter()
        .find(|(code, _)| *code == fips)
        .map(|(_, name)| *name)
}

/// 2-digit state FIPS code for a state name (exact match).
pub fn state_fips_for_name(name: &str) -> Option<&'static str> {
    STATE_NAMES
        .iter()
        .find(|(_, state)| *state == name)
        .map(|(code, _)| *code)
}

/// Predefined map center for a state, if the state FIPS is known.
pub fn state_center(fips: &str) -> Option<GeoPoint> {
    STATE_CENTERS
        .iter()
        .find(|(code, _, _)| *code == fips)
        .map(|(_, lat, lon)| GeoPoint { lat: *lat, lon: *lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_catalog_lookup() {
        let catalog = MetricCatalog::new();

        assert_eq!(catalog.label("PDI"), Some("Principled Deprivation Index"));
        assert_eq!(catalog.label("phlth_crudeprev"), Some("Poor physical health"));
        assert_eq!(catalog.label("no_such_metric"), None);

        assert_eq!(catalog.group("SVI"), Some(MetricGroup::Index));
        assert_eq!(catalog.group("diabetes_crudeprev"), Some(MetricGroup::Condition));
    }

    #[test]
    fn test_catalog_covers_all_entries() {
        let catalog = MetricCatalog::new();
        for entry in INDICES.iter().chain(CONDITIONS) {
            assert!(catalog.contains(entry.key), "missing {}", entry.key);
        }
    }

    #[test]
    fn test_state_lookups() {
        assert_eq!(state_name("39"), Some("Ohio"));
        assert_eq!(state_fips_for_name("Ohio"), Some("39"));
        assert_eq!(state_fips_for_name("Atlantis"), None);

        let ohio = state_center("39").unwrap();
        assert_eq!(ohio.lat, 40.2521);
        assert_eq!(ohio.lon, -83.6197);
    }

    #[test]
    fn test_every_state_has_a_center() {
        for (fips, name) in STATE_NAMES {
            assert!(state_center(fips).is_some(), "no center for {}", name);
        }
    }
}
