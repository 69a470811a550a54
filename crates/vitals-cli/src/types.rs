use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use vitals_convert::VitalsEntry;
use vitals_model::{Result, VitalsError};

/// One row of a vitals entry CSV.
///
/// Value columns are numbers in the row's display units; each `*_unit`
/// column defaults to the family's canonical unit when blank. Blank value
/// columns mean "field not provided".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryRow {
    pub recorded_at: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub height: Option<f64>,
    pub height_unit: Option<String>,
    pub temperature: Option<f64>,
    pub temperature_unit: Option<String>,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub pressure_unit: Option<String>,
    pub blood_sugar: Option<f64>,
    pub blood_sugar_unit: Option<String>,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<f64>,
}

impl EntryRow {
    /// Resolves the row's unit columns and builds the form-entry shape the
    /// converter canonicalizes.
    ///
    /// # Errors
    ///
    /// Returns `VitalsError::UnknownUnit` when a unit column holds a symbol
    /// outside its family.
    pub fn into_entry(self) -> Result<(VitalsEntry, Option<DateTime<Utc>>)> {
        let entry = VitalsEntry {
            weight: self.weight,
            weight_unit: parse_unit(self.weight_unit.as_deref())?,
            height: self.height,
            height_unit: parse_unit(self.height_unit.as_deref())?,
            temperature: self.temperature,
            temperature_unit: parse_unit(self.temperature_unit.as_deref())?,
            systolic: self.systolic,
            diastolic: self.diastolic,
            pressure_unit: parse_unit(self.pressure_unit.as_deref())?,
            blood_sugar: self.blood_sugar,
            blood_sugar_unit: parse_unit(self.blood_sugar_unit.as_deref())?,
            heart_rate: self.heart_rate,
            oxygen_saturation: self.oxygen_saturation,
            respiratory_rate: self.respiratory_rate,
        };
        Ok((entry, self.recorded_at))
    }
}

/// Parses an optional unit column, defaulting blank to the canonical unit.
fn parse_unit<U>(field: Option<&str>) -> Result<U>
where
    U: Default + FromStr<Err = VitalsError>,
{
    match field {
        Some(symbol) if !symbol.trim().is_empty() => symbol.parse(),
        _ => Ok(U::default()),
    }
}

/// A per-row problem encountered during normalization. Rows with problems
/// are skipped, not fatal.
#[derive(Debug, Clone)]
pub struct RowIssue {
    /// 1-based data row number (excluding the header).
    pub row: usize,
    pub message: String,
}

/// Outcome of a `normalize` run.
#[derive(Debug)]
pub struct NormalizeSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub rows_written: usize,
    pub empty_rows: usize,
    pub issues: Vec<RowIssue>,
}

impl NormalizeSummary {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_model::{PressureUnit, WeightUnit};

    #[test]
    fn blank_unit_columns_default_to_canonical() {
        let row = EntryRow {
            weight: Some(70.0),
            systolic: Some(120.0),
            ..EntryRow::default()
        };
        let (entry, recorded_at) = row.into_entry().expect("valid row");
        assert_eq!(entry.weight_unit, WeightUnit::Kilograms);
        assert_eq!(entry.pressure_unit, PressureUnit::MillimetersOfMercury);
        assert_eq!(recorded_at, None);
    }

    #[test]
    fn unit_columns_parse_symbols() {
        let row = EntryRow {
            weight: Some(165.0),
            weight_unit: Some("lb".to_string()),
            pressure_unit: Some("kPa".to_string()),
            ..EntryRow::default()
        };
        let (entry, _) = row.into_entry().expect("valid row");
        assert_eq!(entry.weight_unit, WeightUnit::Pounds);
        assert_eq!(entry.pressure_unit, PressureUnit::Kilopascals);
    }

    #[test]
    fn bad_unit_symbol_is_a_row_error() {
        let row = EntryRow {
            weight: Some(165.0),
            weight_unit: Some("grams of sand".to_string()),
            ..EntryRow::default()
        };
        assert!(row.into_entry().is_err());
    }

    #[test]
    fn rows_deserialize_from_csv() {
        let data = "recorded_at,weight,weight_unit,height,height_unit,temperature,temperature_unit,systolic,diastolic,pressure_unit,blood_sugar,blood_sugar_unit,heart_rate,oxygen_saturation,respiratory_rate\n\
                    2026-08-01T09:30:00Z,165,lb,68,in,98.6,F,120,80,,100,,72,98,16\n\
                    ,,,,,,,,,,,,,,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<EntryRow> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .expect("rows deserialize");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].weight, Some(165.0));
        assert_eq!(rows[0].weight_unit.as_deref(), Some("lb"));
        assert!(rows[0].recorded_at.is_some());
        assert_eq!(rows[1].weight, None);
    }
}
