//! Fixed-resolution latitude/longitude sample grids
//!
//! A [`SampleGrid`] is a read-only two-dimensional container of fixed-point samples indexed by
//! `(row, column)`. Rows run from the south pole to the north pole and columns from -180 to +180
//! degrees longitude, both at [`SAMPLING_RES`] degree spacing. The +180 column repeats the -180
//! column so that every cell has a right-hand neighbour, including cells on the wrap seam.
//!
//! Samples are stored as `i16` counts. The [`GridQuantity`] of a grid names the physical
//! quantity and the fixed scale factor that converts a count into engineering units.
//!
//! Grids are usually built from the compiled-in [`tables`](crate::tables), but a snapshot
//! regenerated from newer model coefficients can be supplied as headerless CSV: [`LAT_DIM`]
//! rows of [`LON_DIM`] integers, first row at latitude -90.
use std::fmt::{self, Debug, Display};
use std::path::Path;

use log::debug;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::GeomagError;
use crate::lookup::GridCell;
use crate::tables::SAMPLE_COUNT;

/// Grid spacing in degrees, both axes
pub const SAMPLING_RES: f64 = 10.0;
/// Latitude of the first grid row, degrees
pub const SAMPLING_MIN_LAT: f64 = -90.0;
/// Latitude of the last grid row, degrees
pub const SAMPLING_MAX_LAT: f64 = 90.0;
/// Longitude of the first grid column, degrees
pub const SAMPLING_MIN_LON: f64 = -180.0;
/// Longitude of the last grid column, degrees
pub const SAMPLING_MAX_LON: f64 = 180.0;
/// Number of latitude rows
pub const LAT_DIM: usize = 19;
/// Number of longitude columns, including the repeated +180 column
pub const LON_DIM: usize = 37;

/// Physical quantity stored in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridQuantity {
    /// Magnetic declination, stored as radians x 10^4
    Declination,
    /// Magnetic inclination, stored as radians x 10^4
    Inclination,
    /// Total field strength, stored as milli-gauss x 10
    Strength,
}
impl GridQuantity {
    /// All quantities in table order
    pub const ALL: [GridQuantity; 3] = [
        GridQuantity::Declination,
        GridQuantity::Inclination,
        GridQuantity::Strength,
    ];
    /// Engineering units represented by a single stored count.
    ///
    /// Angles are converted to radians and strength to gauss (one count is 0.1 mG).
    pub fn units_per_count(&self) -> f64 {
        match self {
            GridQuantity::Declination | GridQuantity::Inclination => 1e-4,
            GridQuantity::Strength => 1e-4,
        }
    }
    /// Engineering unit symbol of [`SampleGrid::value`]
    pub fn unit(&self) -> &'static str {
        match self {
            GridQuantity::Declination | GridQuantity::Inclination => "rad",
            GridQuantity::Strength => "G",
        }
    }
    /// Lower-case name, also used as the file stem when exporting tables
    pub fn name(&self) -> &'static str {
        match self {
            GridQuantity::Declination => "declination",
            GridQuantity::Inclination => "inclination",
            GridQuantity::Strength => "strength",
        }
    }
}
impl Display for GridQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Latitude in degrees of a grid row
pub fn row_latitude(row: usize) -> f64 {
    SAMPLING_MIN_LAT + row as f64 * SAMPLING_RES
}
/// Longitude in degrees of a grid column
pub fn col_longitude(col: usize) -> f64 {
    SAMPLING_MIN_LON + col as f64 * SAMPLING_RES
}

/// Read-only grid of fixed-point samples for one quantity
#[derive(Clone, PartialEq)]
pub struct SampleGrid {
    quantity: GridQuantity,
    samples: DMatrix<i16>,
}
impl Debug for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SampleGrid {{ {:?} x {:?}, quantity: {:?} }}",
            self.samples.nrows(),
            self.samples.ncols(),
            self.quantity
        )
    }
}
impl Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SampleGrid: {} ({}) | Size: {} x {} | Lat range: [{}, {}] | Lon range: [{}, {}]",
            self.quantity,
            self.quantity.unit(),
            self.samples.nrows(),
            self.samples.ncols(),
            SAMPLING_MIN_LAT,
            SAMPLING_MAX_LAT,
            SAMPLING_MIN_LON,
            SAMPLING_MAX_LON
        )
    }
}
impl SampleGrid {
    /// Create a grid from a full row-major sample table.
    ///
    /// The table length is fixed by its type, so this cannot fail. Compiled-in tables use this
    /// constructor; their seam column is checked by the unit tests instead of at runtime.
    pub fn from_samples(quantity: GridQuantity, samples: &[i16; SAMPLE_COUNT]) -> Self {
        SampleGrid {
            quantity,
            samples: DMatrix::from_row_slice(LAT_DIM, LON_DIM, samples),
        }
    }
    /// Create a grid from a row-major slice of samples, validating its length and seam column.
    ///
    /// # Errors
    /// - [`GeomagError::SampleCount`] if the slice does not hold `LAT_DIM * LON_DIM` samples
    /// - [`GeomagError::SeamMismatch`] if any row's +180 sample differs from its -180 sample
    ///
    /// # Example
    /// ```rust
    /// use geomag::grid::{GridQuantity, SampleGrid, LAT_DIM, LON_DIM};
    /// let samples = vec![5462_i16; LAT_DIM * LON_DIM];
    /// let grid = SampleGrid::from_row_slice(GridQuantity::Strength, &samples).unwrap();
    /// assert_eq!(grid.sample(0, 0), 5462);
    /// ```
    pub fn from_row_slice(quantity: GridQuantity, samples: &[i16]) -> Result<Self, GeomagError> {
        if samples.len() != SAMPLE_COUNT {
            return Err(GeomagError::SampleCount {
                quantity,
                found: samples.len(),
                expected: SAMPLE_COUNT,
            });
        }
        let grid = SampleGrid {
            quantity,
            samples: DMatrix::from_row_slice(LAT_DIM, LON_DIM, samples),
        };
        grid.check_seam()?;
        Ok(grid)
    }
    /// Load a grid from a headerless CSV file of `LAT_DIM` rows by `LON_DIM` integer columns.
    ///
    /// # Errors
    /// Returns [`GeomagError::Csv`] if the file cannot be read or a cell is not an `i16`,
    /// [`GeomagError::RowLength`] for a row of the wrong width, and the errors of
    /// [`SampleGrid::from_row_slice`] for the assembled table.
    pub fn from_csv<P: AsRef<Path>>(quantity: GridQuantity, path: P) -> Result<Self, GeomagError> {
        let path = path.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        let mut samples: Vec<i16> = Vec::with_capacity(SAMPLE_COUNT);
        for (row, result) in rdr.deserialize::<Vec<i16>>().enumerate() {
            let record = result?;
            if record.len() != LON_DIM {
                return Err(GeomagError::RowLength {
                    quantity,
                    row,
                    found: record.len(),
                    expected: LON_DIM,
                });
            }
            samples.extend(record);
        }
        debug!(
            "Read {} {} samples from {}",
            samples.len(),
            quantity,
            path.display()
        );
        Self::from_row_slice(quantity, &samples)
    }
    /// Write the grid as headerless CSV, one latitude row per line starting at -90.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), GeomagError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        for row in 0..LAT_DIM {
            wtr.write_record(self.row_values(row).map(|sample| sample.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
    fn check_seam(&self) -> Result<(), GeomagError> {
        for row in 0..LAT_DIM {
            let first = self.samples[(row, 0)];
            let last = self.samples[(row, LON_DIM - 1)];
            if first != last {
                return Err(GeomagError::SeamMismatch {
                    quantity: self.quantity,
                    row,
                    first,
                    last,
                });
            }
        }
        Ok(())
    }
    /// Quantity stored in this grid
    pub fn quantity(&self) -> GridQuantity {
        self.quantity
    }
    /// Raw fixed-point sample at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= LAT_DIM` or `col >= LON_DIM`.
    pub fn sample(&self, row: usize, col: usize) -> i16 {
        self.samples[(row, col)]
    }
    /// Sample at `(row, col)` converted to engineering units
    pub fn value(&self, row: usize, col: usize) -> f64 {
        f64::from(self.sample(row, col)) * self.quantity.units_per_count()
    }
    /// Raw samples of one latitude row, west to east
    pub fn row_values(&self, row: usize) -> impl Iterator<Item = i16> + '_ {
        (0..LON_DIM).map(move |col| self.samples[(row, col)])
    }
    /// Bilinear interpolation of the four corners of `cell`, in engineering units.
    ///
    /// Interpolates along longitude first and then latitude:
    ///
    /// $$
    /// v = (v_{00}(1 - f_c) + v_{01} f_c)(1 - f_r) + (v_{10}(1 - f_c) + v_{11} f_c) f_r
    /// $$
    pub fn interpolate(&self, cell: &GridCell) -> f64 {
        let v00 = f64::from(self.sample(cell.row, cell.col));
        let v01 = f64::from(self.sample(cell.row, cell.col + 1));
        let v10 = f64::from(self.sample(cell.row + 1, cell.col));
        let v11 = f64::from(self.sample(cell.row + 1, cell.col + 1));
        let fc = cell.col_weight;
        let fr = cell.row_weight;
        let top = v00 * (1.0 - fc) + v01 * fc;
        let bottom = v10 * (1.0 - fc) + v11 * fc;
        (top * (1.0 - fr) + bottom * fr) * self.quantity.units_per_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DECLINATION_SAMPLES, INCLINATION_SAMPLES, STRENGTH_SAMPLES};
    use tempfile::NamedTempFile;

    fn ramp() -> Vec<i16> {
        // periodic in longitude so the seam column matches
        (0..SAMPLE_COUNT)
            .map(|i| {
                let (row, col) = (i / LON_DIM, i % LON_DIM);
                (row * 100 + col % (LON_DIM - 1)) as i16
            })
            .collect()
    }

    #[test]
    fn grid_geometry() {
        assert_eq!(row_latitude(0), SAMPLING_MIN_LAT);
        assert_eq!(row_latitude(LAT_DIM - 1), SAMPLING_MAX_LAT);
        assert_eq!(col_longitude(0), SAMPLING_MIN_LON);
        assert_eq!(col_longitude(LON_DIM - 1), SAMPLING_MAX_LON);
        assert_eq!(row_latitude(9), 0.0);
        assert_eq!(col_longitude(18), 0.0);
    }
    #[test]
    fn compiled_tables_are_periodic() {
        for (quantity, samples) in [
            (GridQuantity::Declination, &DECLINATION_SAMPLES),
            (GridQuantity::Inclination, &INCLINATION_SAMPLES),
            (GridQuantity::Strength, &STRENGTH_SAMPLES),
        ] {
            assert!(SampleGrid::from_row_slice(quantity, samples).is_ok());
        }
    }
    #[test]
    fn compiled_pole_rows() {
        let inclination = SampleGrid::from_samples(GridQuantity::Inclination, &INCLINATION_SAMPLES);
        assert!(inclination.row_values(0).all(|v| v == -12583));
        let strength = SampleGrid::from_samples(GridQuantity::Strength, &STRENGTH_SAMPLES);
        assert!(strength.row_values(LAT_DIM - 1).all(|v| v == 5677));
        // declination keeps its longitude dependence at the poles
        let declination = SampleGrid::from_samples(GridQuantity::Declination, &DECLINATION_SAMPLES);
        assert_eq!(declination.sample(0, 0), 26034);
        assert_eq!(declination.sample(0, 18), -5381);
    }
    #[test]
    fn value_scaling() {
        let declination = SampleGrid::from_samples(GridQuantity::Declination, &DECLINATION_SAMPLES);
        assert_eq!(declination.sample(9, 18), -796);
        assert!((declination.value(9, 18) - (-0.0796)).abs() < 1e-12);
        let strength = SampleGrid::from_samples(GridQuantity::Strength, &STRENGTH_SAMPLES);
        assert_eq!(strength.sample(9, 18), 3194);
        // 319.4 mG
        assert!((strength.value(9, 18) - 0.3194).abs() < 1e-12);
    }
    #[test]
    fn wrong_sample_count() {
        let samples = vec![0_i16; SAMPLE_COUNT - 1];
        match SampleGrid::from_row_slice(GridQuantity::Declination, &samples) {
            Err(GeomagError::SampleCount { found, expected, .. }) => {
                assert_eq!(found, SAMPLE_COUNT - 1);
                assert_eq!(expected, SAMPLE_COUNT);
            }
            other => panic!("Expected SampleCount error, got {other:?}"),
        }
    }
    #[test]
    fn broken_seam() {
        let mut samples = ramp();
        samples[5 * LON_DIM + LON_DIM - 1] += 1;
        match SampleGrid::from_row_slice(GridQuantity::Inclination, &samples) {
            Err(GeomagError::SeamMismatch { row, first, last, .. }) => {
                assert_eq!(row, 5);
                assert_eq!(first + 1, last);
            }
            other => panic!("Expected SeamMismatch error, got {other:?}"),
        }
    }
    #[test]
    fn interpolate_cell_center() {
        let grid = SampleGrid::from_row_slice(GridQuantity::Strength, &ramp()).unwrap();
        let cell = GridCell {
            row: 2,
            col: 3,
            row_weight: 0.5,
            col_weight: 0.5,
        };
        // corners 203, 204, 303, 304
        let expected = 253.5 * GridQuantity::Strength.units_per_count();
        assert!((grid.interpolate(&cell) - expected).abs() < 1e-12);
    }
    #[test]
    fn csv_export_and_reload() {
        let grid = SampleGrid::from_samples(GridQuantity::Declination, &DECLINATION_SAMPLES);
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        grid.to_csv(&path).unwrap();
        let loaded = SampleGrid::from_csv(GridQuantity::Declination, &path).unwrap();
        assert_eq!(grid, loaded);
        std::fs::remove_file(&path).ok();
    }
    #[test]
    fn csv_short_row() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("csv");
        let row = vec!["1"; LON_DIM - 1].join(",");
        std::fs::write(&path, format!("{row}\n")).unwrap();
        match SampleGrid::from_csv(GridQuantity::Strength, &path) {
            Err(GeomagError::RowLength { row, found, .. }) => {
                assert_eq!(row, 0);
                assert_eq!(found, LON_DIM - 1);
            }
            other => panic!("Expected RowLength error, got {other:?}"),
        }
        std::fs::remove_file(&path).ok();
    }
    #[test]
    fn csv_missing_file() {
        let result = SampleGrid::from_csv(GridQuantity::Strength, "does/not/exist.csv");
        assert!(matches!(result, Err(GeomagError::Csv(_))));
    }
}
