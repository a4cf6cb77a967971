//! County Metric Table
//!
//! Loads the CSV side of the join: one row per county with named numeric
//! metric columns. The `COUNTY` column is zero-padded to the 5-digit FIPS
//! join key and the state FIPS is derived from its first two digits.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::{geometry::is_county_fips, DataError};

/// Column holding the county FIPS join key.
pub const COUNTY_COLUMN: &str = "COUNTY";

/// One county row: normalized FIPS plus named metric values.
///
/// Cells that are empty or not parseable as numbers are simply absent, so a
/// county with a missing metric renders as a gap rather than a zero.
#[derive(Debug, Clone)]
pub struct CountyRow {
    pub fips: String,
    pub state_fips: String,
    values: HashMap<String, f64>,
}

impl CountyRow {
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }
}

/// The full county table, indexed by normalized FIPS.
#[derive(Debug, Clone)]
pub struct CountyTable {
    rows: Vec<CountyRow>,
    by_fips: HashMap<String, usize>,
    columns: Vec<String>,
}

impl CountyTable {
    /// Read the CSV once. Fatal on a missing file, a missing `COUNTY`
    /// column, or a join key that cannot be zero-padded to five digits.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let headers = reader
            .headers()
            .map_err(|source| DataError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();

        let county_column = headers
            .iter()
            .position(|h| h == COUNTY_COLUMN)
            .ok_or(DataError::MissingColumn { name: COUNTY_COLUMN })?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != county_column)
            .map(|(_, name)| name.to_string())
            .collect();

        let mut rows = Vec::new();
        let mut by_fips = HashMap::new();

        for record in reader.records() {
            let record = record.map_err(|source| DataError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

            let raw = record.get(county_column).unwrap_or("").trim();
            let fips = zero_pad_fips(raw)
                .ok_or_else(|| DataError::MalformedJoinKey { value: raw.to_string() })?;

            let mut values = HashMap::new();
            for (idx, header) in headers.iter().enumerate() {
                if idx == county_column {
                    continue;
                }
                if let Some(cell) = record.get(idx) {
                    if let Ok(value) = cell.trim().parse::<f64>() {
                        values.insert(header.to_string(), value);
                    }
                }
            }

            let state_fips = fips[..2].to_string();
            let index = rows.len();
            if by_fips.insert(fips.clone(), index).is_some() {
                tracing::warn!(fips = %fips, "duplicate county in table, keeping latest row");
            }

            rows.push(CountyRow {
                fips,
                state_fips,
                values,
            });
        }

        Ok(Self {
            rows,
            by_fips,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Metric column names, in CSV order (join key excluded).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Joined record for a normalized 5-digit county id.
    pub fn get(&self, fips: &str) -> Option<&CountyRow> {
        self.by_fips.get(fips).map(|&idx| &self.rows[idx])
    }

    pub fn rows(&self) -> &[CountyRow] {
        &self.rows
    }

    /// Rows restricted to one state, or everything for `None`.
    pub fn rows_for(&self, state_fips: Option<&str>) -> Vec<&CountyRow> {
        self.rows
            .iter()
            .filter(|row| state_fips.map_or(true, |fips| row.state_fips == fips))
            .collect()
    }

    /// Distinct state FIPS codes present in the table.
    pub fn state_fips_present(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.state_fips.as_str()).collect()
    }
}

/// Zero-pad a county FIPS to five digits; `None` for anything that is not a
/// 1-5 digit numeric string.
fn zero_pad_fips(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.len() > 5 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0>5}", raw);
    debug_assert!(is_county_fips(&padded));
    Some(padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_zero_padded_join_key() {
        let file = write_csv("COUNTY,PDI,phlth_crudeprev\n1001,0.5,12.3\n39049,0.7,15.1\n");
        let table = CountyTable::load(file.path()).unwrap();

        assert_eq!(table.len(), 2);

        // "1001" is padded to "01001" and the state FIPS derived from it
        let autauga = table.get("01001").unwrap();
        assert_eq!(autauga.state_fips, "01");
        assert_eq!(autauga.value("PDI"), Some(0.5));

        let franklin = table.get("39049").unwrap();
        assert_eq!(franklin.state_fips, "39");
        assert_eq!(franklin.value("phlth_crudeprev"), Some(15.1));
    }

    #[test]
    fn test_missing_values_are_absent() {
        let file = write_csv("COUNTY,PDI,SVI\n39049,,not-a-number\n");
        let table = CountyTable::load(file.path()).unwrap();

        let row = table.get("39049").unwrap();
        assert_eq!(row.value("PDI"), None);
        assert_eq!(row.value("SVI"), None);
    }

    #[test]
    fn test_rows_for_state() {
        let file = write_csv("COUNTY,PDI\n39049,0.1\n39001,0.2\n01001,0.3\n");
        let table = CountyTable::load(file.path()).unwrap();

        let ohio = table.rows_for(Some("39"));
        assert_eq!(ohio.len(), 2);
        assert!(ohio.iter().all(|row| row.fips.starts_with("39")));

        assert_eq!(table.rows_for(None).len(), 3);
        assert_eq!(
            table.state_fips_present().into_iter().collect::<Vec<_>>(),
            vec!["01", "39"]
        );
    }

    #[test]
    fn test_missing_county_column_is_fatal() {
        let file = write_csv("FIPS,PDI\n39049,0.1\n");
        let err = CountyTable::load(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { name: COUNTY_COLUMN }));
    }

    #[test]
    fn test_malformed_join_key_is_fatal() {
        let file = write_csv("COUNTY,PDI\n39049x,0.1\n");
        let err = CountyTable::load(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MalformedJoinKey { .. }));
    }
}
