//! CSV batch lookups
//!
//! This module provides:
//! - [`PositionRecord`] for reading query positions from a CSV file
//! - [`FieldRecord`] for writing the interpolated field at each position
//! - [`lookup_records`] to run a table over a batch of positions
//!
//! Input files need `latitude` and `longitude` columns (degrees) and may carry an optional
//! `label` column that is copied through to the output.
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::GeomagError;
use crate::field::{AngleUnit, StrengthUnit};
use crate::lookup::MagneticFieldTable;

/// Query position read from a CSV file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Free-form identifier copied to the output
    #[serde(default)]
    pub label: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}
impl PositionRecord {
    /// Reads a CSV file with a header row and returns its position records.
    ///
    /// # Example
    /// ```no_run
    /// use geomag::batch::PositionRecord;
    /// let records = PositionRecord::from_csv("./data/positions.csv")
    ///     .expect("Failed to read positions");
    /// println!("Loaded {} positions", records.len());
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, GeomagError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: Self = result?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Interpolated field at one position, in the units chosen for the batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub label: Option<String>,
    /// Latitude in degrees, as given in the input
    pub latitude: f64,
    /// Longitude in degrees, as given in the input
    pub longitude: f64,
    pub declination: f64,
    pub inclination: f64,
    pub strength: f64,
}
impl FieldRecord {
    /// Writes field records to a CSV file with a header row.
    pub fn to_csv<P: AsRef<Path>>(records: &[Self], path: P) -> Result<(), GeomagError> {
        let mut wtr = csv::Writer::from_path(path)?;
        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Look up the field at every position in `records`.
///
/// Stops at the first position with a non-finite coordinate; no partial output is returned.
///
/// # Errors
/// [`GeomagError::InvalidRecord`] wrapping the lookup error, with the zero-based record index.
pub fn lookup_records(
    table: &MagneticFieldTable,
    records: &[PositionRecord],
    angle_unit: AngleUnit,
    strength_unit: StrengthUnit,
) -> Result<Vec<FieldRecord>, GeomagError> {
    let mut results = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let field = table
            .lookup(record.latitude, record.longitude)
            .map_err(|e| GeomagError::InvalidRecord {
                index,
                source: Box::new(e),
            })?;
        let (declination, inclination, strength) = field.in_units(angle_unit, strength_unit);
        results.push(FieldRecord {
            label: record.label.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            declination,
            inclination,
            strength,
        });
    }
    info!(
        "Computed {} field estimates ({}, {}) from {}",
        results.len(),
        angle_unit.symbol(),
        strength_unit.symbol(),
        table.metadata()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use tempfile::NamedTempFile;

    fn position(label: &str, latitude: f64, longitude: f64) -> PositionRecord {
        PositionRecord {
            label: Some(label.to_string()),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_position_record_from_csv() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        std::fs::write(
            &path,
            "label,latitude,longitude\nequator,0.0,0.0\nalps, 45.0, 5.0\n,-33.9,18.4\n",
        )
        .unwrap();
        let records = PositionRecord::from_csv(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], position("equator", 0.0, 0.0));
        assert_eq!(records[1], position("alps", 45.0, 5.0));
        assert_eq!(records[2].label, None);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_position_record_without_labels() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        std::fs::write(&path, "latitude,longitude\n10.0,20.0\n").unwrap();
        let records = PositionRecord::from_csv(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, None);
        assert_eq!(records[0].longitude, 20.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_position_record_from_csv_invalid_path() {
        let result = PositionRecord::from_csv("nonexistent.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_records_units() {
        let table = MagneticFieldTable::wmm2020();
        let records = vec![position("equator", 0.0, 0.0)];
        let results =
            lookup_records(&table, &records, AngleUnit::Degrees, StrengthUnit::Nanotesla).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label.as_deref(), Some("equator"));
        assert_approx_eq!(results[0].declination, (-0.0796_f64).to_degrees(), 1e-9);
        assert_approx_eq!(results[0].inclination, (-0.5260_f64).to_degrees(), 1e-9);
        assert_approx_eq!(results[0].strength, 31940.0, 1e-6);
    }

    #[test]
    fn test_lookup_records_invalid() {
        let table = MagneticFieldTable::wmm2020();
        let records = vec![
            position("ok", 10.0, 10.0),
            position("bad", f64::NAN, 10.0),
            position("ok", 20.0, 10.0),
        ];
        match lookup_records(&table, &records, AngleUnit::Radians, StrengthUnit::Gauss) {
            Err(GeomagError::InvalidRecord { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, GeomagError::InvalidInput { .. }));
            }
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_field_record_to_csv() {
        let table = MagneticFieldTable::wmm2020();
        let records = vec![position("a", 45.0, 5.0), position("b", -60.0, 170.0)];
        let results =
            lookup_records(&table, &records, AngleUnit::Radians, StrengthUnit::Gauss).unwrap();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        FieldRecord::to_csv(&results, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("label,latitude,longitude,declination,inclination,strength")
        );
        assert_eq!(lines.count(), 2);
        std::fs::remove_file(&path).ok();
    }
}
