//! Magnetic field estimates and unit conversions
//!
//! A [`FieldEstimate`] carries the three quantities returned by a table lookup in their native
//! engineering units: declination and inclination in radians, strength in gauss. Accessors
//! convert to the units navigation code usually wants (degrees, tesla, nanotesla) and to the
//! field vector in the local-level North-East-Down frame.
use std::fmt::{self, Display};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Tesla per gauss
pub const TESLA_PER_GAUSS: f64 = 1e-4;
/// Milli-gauss per gauss
pub const MILLIGAUSS_PER_GAUSS: f64 = 1e3;

/// Unit for reporting declination and inclination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}
impl AngleUnit {
    /// Convert an angle in radians to this unit
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "deg",
        }
    }
}

/// Unit for reporting field strength
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StrengthUnit {
    #[default]
    Gauss,
    Milligauss,
    Tesla,
    Microtesla,
    Nanotesla,
}
impl StrengthUnit {
    /// Convert a strength in gauss to this unit
    pub fn from_gauss(&self, gauss: f64) -> f64 {
        match self {
            StrengthUnit::Gauss => gauss,
            StrengthUnit::Milligauss => gauss * MILLIGAUSS_PER_GAUSS,
            StrengthUnit::Tesla => gauss * TESLA_PER_GAUSS,
            StrengthUnit::Microtesla => gauss * TESLA_PER_GAUSS * 1e6,
            StrengthUnit::Nanotesla => gauss * TESLA_PER_GAUSS * 1e9,
        }
    }
    pub fn symbol(&self) -> &'static str {
        match self {
            StrengthUnit::Gauss => "G",
            StrengthUnit::Milligauss => "mG",
            StrengthUnit::Tesla => "T",
            StrengthUnit::Microtesla => "uT",
            StrengthUnit::Nanotesla => "nT",
        }
    }
}

/// Interpolated magnetic field at a position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldEstimate {
    /// Declination in radians, positive east of true north
    pub declination: f64,
    /// Inclination (dip) in radians, positive below the horizontal
    pub inclination: f64,
    /// Total field strength in gauss
    pub strength: f64,
}
impl Display for FieldEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FieldEstimate {{ declination: {:.4} rad, inclination: {:.4} rad, strength: {:.4} G }}",
            self.declination, self.inclination, self.strength
        )
    }
}
impl FieldEstimate {
    pub fn declination_degrees(&self) -> f64 {
        self.declination.to_degrees()
    }
    pub fn inclination_degrees(&self) -> f64 {
        self.inclination.to_degrees()
    }
    pub fn strength_milligauss(&self) -> f64 {
        self.strength * MILLIGAUSS_PER_GAUSS
    }
    pub fn strength_tesla(&self) -> f64 {
        self.strength * TESLA_PER_GAUSS
    }
    pub fn strength_microtesla(&self) -> f64 {
        StrengthUnit::Microtesla.from_gauss(self.strength)
    }
    pub fn strength_nanotesla(&self) -> f64 {
        StrengthUnit::Nanotesla.from_gauss(self.strength)
    }
    /// Horizontal component of the field in gauss
    pub fn horizontal_intensity(&self) -> f64 {
        self.strength * self.inclination.cos()
    }
    /// Field vector in the local-level frame (North, East, Down) in gauss
    ///
    /// $$
    /// B = F \begin{bmatrix} \cos I \cos D \\\\ \cos I \sin D \\\\ \sin I \end{bmatrix}
    /// $$
    ///
    /// # Example
    /// ```rust
    /// let field = geomag::lookup(45.0, 5.0).unwrap();
    /// let b = field.ned_vector();
    /// assert!((b.norm() - field.strength).abs() < 1e-12);
    /// ```
    pub fn ned_vector(&self) -> Vector3<f64> {
        let horizontal = self.horizontal_intensity();
        Vector3::new(
            horizontal * self.declination.cos(),
            horizontal * self.declination.sin(),
            self.strength * self.inclination.sin(),
        )
    }
    /// The three quantities as (declination, inclination, strength) in the requested units
    pub fn in_units(&self, angle: AngleUnit, strength: StrengthUnit) -> (f64, f64, f64) {
        (
            angle.from_radians(self.declination),
            angle.from_radians(self.inclination),
            strength.from_gauss(self.strength),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sample() -> FieldEstimate {
        FieldEstimate {
            declination: -0.0796,
            inclination: -0.5260,
            strength: 0.3194,
        }
    }
    #[test]
    fn strength_units() {
        let field = sample();
        assert_approx_eq!(field.strength_milligauss(), 319.4, 1e-9);
        assert_approx_eq!(field.strength_tesla(), 3.194e-5, 1e-15);
        assert_approx_eq!(field.strength_microtesla(), 31.94, 1e-9);
        assert_approx_eq!(field.strength_nanotesla(), 31940.0, 1e-6);
    }
    #[test]
    fn angle_units() {
        let field = sample();
        assert_approx_eq!(field.declination_degrees(), -4.5608, 1e-4);
        let (dec, inc, strength) = field.in_units(AngleUnit::Degrees, StrengthUnit::Nanotesla);
        assert_approx_eq!(dec, field.declination_degrees());
        assert_approx_eq!(inc, field.inclination_degrees());
        assert_approx_eq!(strength, 31940.0, 1e-6);
        let (dec, _, strength) = field.in_units(AngleUnit::Radians, StrengthUnit::Gauss);
        assert_eq!(dec, field.declination);
        assert_eq!(strength, field.strength);
    }
    #[test]
    fn ned_vector() {
        let field = sample();
        let b = field.ned_vector();
        assert_approx_eq!(b.norm(), field.strength, 1e-12);
        // negative inclination points the field up, out of the ground
        assert!(b[2] < 0.0);
        // negative declination swings magnetic north to the west
        assert!(b[1] < 0.0);
        let vertical = FieldEstimate {
            declination: 0.3,
            inclination: FRAC_PI_2,
            strength: 0.5,
        };
        let b = vertical.ned_vector();
        assert_approx_eq!(b[0], 0.0, 1e-12);
        assert_approx_eq!(b[1], 0.0, 1e-12);
        assert_approx_eq!(b[2], 0.5, 1e-12);
    }
}
