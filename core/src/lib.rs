//! Magnetic declination, inclination and field strength from a pre-sampled world grid
//!
//! Navigation and attitude filters that use a magnetometer need the local magnetic variation to
//! turn a magnetic heading into a true heading, and the expected field direction and intensity
//! to validate or fuse magnetometer readings. The authoritative source, the World Magnetic
//! Model, is a spherical-harmonic expansion that is expensive to evaluate in a tight loop. This
//! crate instead carries a coarse global grid sampled from the model (WMM-2020, 10 degree
//! spacing) and reconstructs the field at any position by bilinear interpolation.
//!
//! The primary entry point is [`MagneticFieldTable::lookup`] (or the free function [`lookup`]
//! over a shared compiled-in table), which returns a [`FieldEstimate`]:
//!
//! ```rust
//! use geomag::MagneticFieldTable;
//! let table = MagneticFieldTable::wmm2020();
//! let field = table.lookup(47.6, -122.3).unwrap();
//! println!(
//!     "declination {:.2} deg, inclination {:.2} deg, strength {:.1} nT",
//!     field.declination_degrees(),
//!     field.inclination_degrees(),
//!     field.strength_nanotesla()
//! );
//! ```
//!
//! # Modules
//! - [`grid`]: sampling constants and the read-only [`SampleGrid`](grid::SampleGrid) container
//! - [`tables`]: the compiled-in WMM-2020 samples
//! - [`lookup`]: cell resolution and the interpolating [`MagneticFieldTable`]
//! - [`field`]: the [`FieldEstimate`] result and unit conversions
//! - [`config`]: serializable lookup configuration
//! - [`batch`]: CSV batch processing
//!
//! The grid encodes a single epoch. There is no secular-variation extrapolation and no altitude
//! dependence; accuracy is bounded by the 10 degree grid spacing.
pub mod batch;
pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod lookup;
pub mod tables;

pub use error::GeomagError;
pub use field::FieldEstimate;
pub use lookup::{MagneticFieldTable, lookup};

use grid::{SAMPLING_MAX_LAT, SAMPLING_MIN_LAT, SAMPLING_MIN_LON};

/// Wrap a longitude to the range [-180, 180) degrees
///
/// Uses a single Euclidean remainder, so the cost does not depend on how far the input is from
/// the range. Note that +180 maps to -180.
///
/// # Arguments
/// * `longitude` - The longitude in degrees, any finite value.
/// # Returns
/// * The wrapped longitude. Rounding can yield exactly 180.0 for inputs a hair below a multiple
///   of 360 west of the seam; that value indexes the repeated seam column.
/// # Example
/// ```rust
/// use geomag::wrap_longitude;
/// assert_eq!(wrap_longitude(190.0), -170.0);
/// assert_eq!(wrap_longitude(180.0), -180.0);
/// assert_eq!(wrap_longitude(-540.0), -180.0);
/// ```
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude - SAMPLING_MIN_LON).rem_euclid(360.0) + SAMPLING_MIN_LON
}
/// Clamp a latitude to the range [-90, 90] degrees
///
/// Latitudes beyond a pole are pinned to that pole rather than reflected over it.
///
/// # Example
/// ```rust
/// use geomag::clamp_latitude;
/// assert_eq!(clamp_latitude(95.0), 90.0);
/// assert_eq!(clamp_latitude(-120.0), -90.0);
/// assert_eq!(clamp_latitude(12.5), 12.5);
/// ```
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(SAMPLING_MIN_LAT, SAMPLING_MAX_LAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(180.0), -180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert_eq!(wrap_longitude(725.0), 5.0);
        assert_eq!(wrap_longitude(-725.0), -5.0);
    }
    #[test]
    fn test_wrap_longitude_large() {
        let wrapped = wrap_longitude(1.0e12 + 10.0);
        assert!((-180.0..=180.0).contains(&wrapped));
    }
    #[test]
    fn test_clamp_latitude() {
        assert_eq!(clamp_latitude(90.0), 90.0);
        assert_eq!(clamp_latitude(90.5), 90.0);
        assert_eq!(clamp_latitude(-90.0), -90.0);
        assert_eq!(clamp_latitude(-1000.0), -90.0);
        assert_eq!(clamp_latitude(-45.0), -45.0);
    }
}
