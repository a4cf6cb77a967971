//! County Geometry
//!
//! Loads the county GeoJSON FeatureCollection and normalizes every feature id
//! to the 5-digit `STATE+COUNTY` FIPS string used as the join key. Geometry is
//! read once at startup and immutable afterwards.

use serde_json::{json, Value};
use std::path::Path;

use super::DataError;

/// A county polygon keyed by its normalized 5-digit FIPS id.
///
/// The raw GeoJSON feature is kept as a `serde_json::Value` with the
/// normalized id injected, so filtered collections can be assembled without
/// re-encoding coordinate arrays.
#[derive(Debug, Clone)]
pub struct CountyFeature {
    id: String,
    state_fips: String,
    feature: Value,
}

impl CountyFeature {
    /// Normalized `STATE+COUNTY` FIPS id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// First two digits of the id.
    pub fn state_fips(&self) -> &str {
        &self.state_fips
    }

    /// The raw GeoJSON feature, id-normalized.
    pub fn as_value(&self) -> &Value {
        &self.feature
    }
}

/// The full id-normalized county feature collection.
#[derive(Debug, Clone)]
pub struct CountyGeometry {
    features: Vec<CountyFeature>,
}

impl CountyGeometry {
    /// Read and normalize a GeoJSON file. Fatal on malformed input.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let root: Value = serde_json::from_str(&content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_value(root)
    }

    /// Normalize an already-parsed GeoJSON document.
    pub fn from_value(root: Value) -> Result<Self, DataError> {
        if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(DataError::NotFeatureCollection);
        }

        // Take the array out of the document instead of cloning it; the
        // national collection is large.
        let raw_features = match root {
            Value::Object(mut map) => match map.remove("features") {
                Some(Value::Array(features)) => features,
                _ => return Err(DataError::NotFeatureCollection),
            },
            _ => return Err(DataError::NotFeatureCollection),
        };

        let mut features = Vec::with_capacity(raw_features.len());
        for (index, mut feature) in raw_features.into_iter().enumerate() {
            let id = normalized_fips(&feature)
                .ok_or(DataError::MissingFipsProperties { index })?;

            if !is_county_fips(&id) {
                return Err(DataError::MalformedJoinKey { value: id });
            }

            let state_fips = id[..2].to_string();
            feature["id"] = Value::String(id.clone());

            features.push(CountyFeature {
                id,
                state_fips,
                feature,
            });
        }

        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Whether a normalized county id has geometry.
    pub fn contains(&self, fips: &str) -> bool {
        self.features.iter().any(|f| f.id == fips)
    }

    pub fn feature_ids(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.id.as_str())
    }

    /// Assemble a FeatureCollection, optionally restricted to one state.
    pub fn collection(&self, state_fips: Option<&str>) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .filter(|f| state_fips.map_or(true, |fips| f.state_fips == fips))
            .map(|f| f.feature.clone())
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

/// Build the join key from `properties.STATE` + `properties.COUNTY`.
fn normalized_fips(feature: &Value) -> Option<String> {
    let properties = feature.get("properties")?;
    let state = properties.get("STATE")?.as_str()?;
    let county = properties.get("COUNTY")?.as_str()?;
    Some(format!("{}{}", state, county))
}

/// A valid join key is exactly five ASCII digits.
pub(crate) fn is_county_fips(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}
