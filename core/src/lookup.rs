//! Grid interpolation engine
//!
//! Evaluating the World Magnetic Model's spherical-harmonic expansion is too expensive for a
//! navigation loop on constrained hardware. Instead, [`MagneticFieldTable`] holds three coarse
//! pre-sampled grids (declination, inclination and strength) and reconstructs the field at any
//! position by bilinear interpolation over the enclosing grid cell.
//!
//! # Query handling
//! - Latitude is clamped into [-90, 90]. The polar rows are valid samples, so a latitude of 95
//!   returns the same estimate as 90.
//! - Longitude is reduced into [-180, 180) with `((lon + 180) mod 360) - 180`. The grid repeats
//!   the -180 column at +180, so the cell to the west of the seam always has an eastern edge.
//! - NaN or infinite coordinates are rejected with [`GeomagError::InvalidInput`].
//!
//! There is no special case at the poles; clamping plus the stored polar rows is sufficient.
//!
//! A lookup reads twelve samples and performs a handful of multiplications. It does not
//! allocate, log, or block, and the table is immutable, so a single table can be shared across
//! threads without locking.
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{Duration, NaiveDate};
use log::{debug, info};
use nav_types::WGS84;
use serde::{Deserialize, Serialize};

use crate::error::GeomagError;
use crate::field::FieldEstimate;
use crate::grid::{
    GridQuantity, LAT_DIM, LON_DIM, SAMPLING_MIN_LAT, SAMPLING_MIN_LON, SAMPLING_RES, SampleGrid,
};
use crate::tables::{DECLINATION_SAMPLES, INCLINATION_SAMPLES, STRENGTH_SAMPLES, WMM_2020};
use crate::{clamp_latitude, wrap_longitude};

/// Provenance of a set of sample grids: the model, its version, and the epoch as a decimal year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridMetadata {
    pub model: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub epoch: f64,
}
impl GridMetadata {
    /// Calendar date of the model epoch.
    ///
    /// The fractional part of the decimal year is converted to whole days from January 1st,
    /// accounting for leap years. Returns `None` if the epoch is not a representable date.
    ///
    /// # Example
    /// ```rust
    /// use geomag::tables::WMM_2020;
    /// let date = WMM_2020.epoch_date().unwrap();
    /// assert_eq!(date.to_string(), "2020-08-26");
    /// ```
    pub fn epoch_date(&self) -> Option<NaiveDate> {
        if !self.epoch.is_finite() {
            return None;
        }
        let year = i32::try_from(self.epoch.floor() as i64).ok()?;
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let next = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        let days_in_year = (next - start).num_days() as f64;
        let offset = ((self.epoch - f64::from(year)) * days_in_year).floor() as i64;
        start.checked_add_signed(Duration::days(offset))
    }
}
impl std::fmt::Display for GridMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (version {}, epoch {:.4})",
            self.model, self.version, self.epoch
        )
    }
}

/// Grid cell enclosing a query point and the bilinear weights within it.
///
/// `row` and `col` index the south-west corner. The weights are the fractional distance of the
/// query from that corner toward the next row (north) and the next column (east), each in
/// `[0, 1]`. A weight of exactly 1 occurs only on the last row or column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub row_weight: f64,
    pub col_weight: f64,
}
impl GridCell {
    /// Resolve the grid cell containing a query position.
    ///
    /// # Arguments
    /// - `latitude` - degrees, clamped into [-90, 90]
    /// - `longitude` - degrees, any finite value
    ///
    /// # Errors
    /// [`GeomagError::InvalidInput`] if either coordinate is NaN or infinite.
    ///
    /// # Example
    /// ```rust
    /// use geomag::lookup::GridCell;
    /// let cell = GridCell::locate(45.0, 5.0).unwrap();
    /// assert_eq!((cell.row, cell.col), (13, 18));
    /// assert_eq!((cell.row_weight, cell.col_weight), (0.5, 0.5));
    /// ```
    pub fn locate(latitude: f64, longitude: f64) -> Result<GridCell, GeomagError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeomagError::InvalidInput {
                latitude,
                longitude,
            });
        }
        let row = (clamp_latitude(latitude) - SAMPLING_MIN_LAT) / SAMPLING_RES;
        let col = (wrap_longitude(longitude) - SAMPLING_MIN_LON) / SAMPLING_RES;
        // Both are non-negative here; the upper clamp keeps a 2x2 neighbourhood in range.
        let row0 = (row.floor() as usize).min(LAT_DIM - 2);
        let col0 = (col.floor() as usize).min(LON_DIM - 2);
        Ok(GridCell {
            row: row0,
            col: col0,
            row_weight: row - row0 as f64,
            col_weight: col - col0 as f64,
        })
    }
}

/// Interpolating lookup over declination, inclination and strength grids.
#[derive(Clone, Debug)]
pub struct MagneticFieldTable {
    declination: SampleGrid,
    inclination: SampleGrid,
    strength: SampleGrid,
    metadata: GridMetadata,
}
impl Default for MagneticFieldTable {
    fn default() -> Self {
        MagneticFieldTable::wmm2020()
    }
}
impl MagneticFieldTable {
    /// Table over the compiled-in WMM-2020 samples
    pub fn wmm2020() -> Self {
        MagneticFieldTable {
            declination: SampleGrid::from_samples(GridQuantity::Declination, &DECLINATION_SAMPLES),
            inclination: SampleGrid::from_samples(GridQuantity::Inclination, &INCLINATION_SAMPLES),
            strength: SampleGrid::from_samples(GridQuantity::Strength, &STRENGTH_SAMPLES),
            metadata: WMM_2020,
        }
    }
    /// Table over caller-supplied grids.
    ///
    /// # Errors
    /// [`GeomagError::QuantityMismatch`] if a grid is passed in the wrong position.
    pub fn new(
        declination: SampleGrid,
        inclination: SampleGrid,
        strength: SampleGrid,
        metadata: GridMetadata,
    ) -> Result<Self, GeomagError> {
        for (expected, grid) in GridQuantity::ALL
            .iter()
            .zip([&declination, &inclination, &strength])
        {
            if grid.quantity() != *expected {
                return Err(GeomagError::QuantityMismatch {
                    expected: *expected,
                    found: grid.quantity(),
                });
            }
        }
        Ok(MagneticFieldTable {
            declination,
            inclination,
            strength,
            metadata,
        })
    }
    /// Table over an external snapshot stored as one headerless CSV file per grid.
    ///
    /// See [`SampleGrid::from_csv`] for the file layout.
    pub fn from_csv_files<P: AsRef<Path>>(
        declination: P,
        inclination: P,
        strength: P,
        metadata: GridMetadata,
    ) -> Result<Self, GeomagError> {
        let table = MagneticFieldTable::new(
            SampleGrid::from_csv(GridQuantity::Declination, declination)?,
            SampleGrid::from_csv(GridQuantity::Inclination, inclination)?,
            SampleGrid::from_csv(GridQuantity::Strength, strength)?,
            metadata,
        )?;
        info!("Loaded magnetic field table {}", table.metadata);
        Ok(table)
    }
    /// Write the three grids to `<directory>/<quantity>.csv`, creating the directory if needed.
    ///
    /// # Returns
    /// The written paths in declination, inclination, strength order.
    pub fn export_csv<P: AsRef<Path>>(&self, directory: P) -> Result<Vec<PathBuf>, GeomagError> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;
        let mut paths = Vec::with_capacity(GridQuantity::ALL.len());
        for quantity in GridQuantity::ALL {
            let path = directory.join(format!("{}.csv", quantity.name()));
            self.grid(quantity).to_csv(&path)?;
            debug!("Wrote {} grid to {}", quantity, path.display());
            paths.push(path);
        }
        Ok(paths)
    }
    /// Estimate the magnetic field at a position.
    ///
    /// # Arguments
    /// - `latitude` - degrees; values beyond +/-90 are clamped to the pole
    /// - `longitude` - degrees; any finite value, wrapped into [-180, 180)
    ///
    /// # Returns
    /// Declination and inclination in radians and strength in gauss.
    ///
    /// # Errors
    /// [`GeomagError::InvalidInput`] if either coordinate is NaN or infinite.
    ///
    /// # Example
    /// ```rust
    /// use geomag::lookup::MagneticFieldTable;
    /// let table = MagneticFieldTable::wmm2020();
    /// let field = table.lookup(0.0, 0.0).unwrap();
    /// assert!((field.inclination - (-0.5260)).abs() < 1e-12);
    /// ```
    pub fn lookup(&self, latitude: f64, longitude: f64) -> Result<FieldEstimate, GeomagError> {
        let cell = GridCell::locate(latitude, longitude)?;
        Ok(FieldEstimate {
            declination: self.declination.interpolate(&cell),
            inclination: self.inclination.interpolate(&cell),
            strength: self.strength.interpolate(&cell),
        })
    }
    /// Estimate the magnetic field at a geodetic position. Altitude is ignored.
    pub fn lookup_wgs84(&self, position: &WGS84<f64>) -> Result<FieldEstimate, GeomagError> {
        self.lookup(position.latitude_degrees(), position.longitude_degrees())
    }
    /// Declination in radians, positive east
    pub fn declination(&self, latitude: f64, longitude: f64) -> Result<f64, GeomagError> {
        self.interpolate(GridQuantity::Declination, latitude, longitude)
    }
    /// Inclination in radians, positive down
    pub fn inclination(&self, latitude: f64, longitude: f64) -> Result<f64, GeomagError> {
        self.interpolate(GridQuantity::Inclination, latitude, longitude)
    }
    /// Total field strength in gauss
    pub fn strength(&self, latitude: f64, longitude: f64) -> Result<f64, GeomagError> {
        self.interpolate(GridQuantity::Strength, latitude, longitude)
    }
    fn interpolate(
        &self,
        quantity: GridQuantity,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, GeomagError> {
        let cell = GridCell::locate(latitude, longitude)?;
        Ok(self.grid(quantity).interpolate(&cell))
    }
    /// Grid holding `quantity`
    pub fn grid(&self, quantity: GridQuantity) -> &SampleGrid {
        match quantity {
            GridQuantity::Declination => &self.declination,
            GridQuantity::Inclination => &self.inclination,
            GridQuantity::Strength => &self.strength,
        }
    }
    pub fn metadata(&self) -> &GridMetadata {
        &self.metadata
    }
}

static WMM_2020_TABLE: OnceLock<MagneticFieldTable> = OnceLock::new();

/// Process-wide table over the compiled-in WMM-2020 samples, built on first use.
pub fn magnetic_field_table() -> &'static MagneticFieldTable {
    WMM_2020_TABLE.get_or_init(MagneticFieldTable::wmm2020)
}

/// Estimate the magnetic field at a position using the compiled-in WMM-2020 table.
///
/// # Example
/// ```rust
/// let field = geomag::lookup(45.0, -75.0).unwrap();
/// println!("Declination: {:.2} deg", field.declination_degrees());
/// assert!(geomag::lookup(f64::NAN, 0.0).is_err());
/// ```
pub fn lookup(latitude: f64, longitude: f64) -> Result<FieldEstimate, GeomagError> {
    magnetic_field_table().lookup(latitude, longitude)
}
