//! Vehicle fuel model used to derive the remaining range.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned by [`VehicleProfile::new`].
#[derive(Debug, Error, PartialEq)]
pub enum VehicleProfileError {
    /// Tank capacity was negative or non-finite.
    #[error("tank capacity {0} must be a finite, non-negative number of gallons")]
    InvalidTankCapacity(f64),
    /// Fuel efficiency was negative or non-finite.
    #[error("fuel efficiency {0} must be a finite, non-negative number of miles per gallon")]
    InvalidFuelEfficiency(f64),
    /// A fraction fell outside `0.0..=1.0`.
    #[error("{field} {value} must be between 0.0 and 1.0")]
    InvalidFraction {
        /// Name of the offending field.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
}

/// Tank and consumption figures for the traveller's vehicle.
///
/// Deserialising goes through [`VehicleProfile::new`], so configuration
/// cannot produce an invalid profile. Missing fields take the
/// [`Default`] values.
///
/// # Examples
/// ```
/// use waystop_core::VehicleProfile;
///
/// # fn main() -> Result<(), waystop_core::VehicleProfileError> {
/// let car = VehicleProfile::new(14.0, 30.0, 0.5, 0.2)?;
/// assert_eq!(car.remaining_range_miles(), 210.0);
/// assert!(!car.is_fuel_low());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "VehicleProfileFields")
)]
pub struct VehicleProfile {
    tank_capacity_gallons: f64,
    fuel_efficiency_mpg: f64,
    current_fuel_level: f64,
    safety_buffer_fraction: f64,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            tank_capacity_gallons: 14.0,
            fuel_efficiency_mpg: 30.0,
            current_fuel_level: 1.0,
            safety_buffer_fraction: 0.2,
        }
    }
}

impl VehicleProfile {
    /// Validate and construct a [`VehicleProfile`].
    ///
    /// # Errors
    /// Returns [`VehicleProfileError`] when capacity or efficiency is
    /// negative or non-finite, or when a fraction is outside `0.0..=1.0`.
    pub fn new(
        tank_capacity_gallons: f64,
        fuel_efficiency_mpg: f64,
        current_fuel_level: f64,
        safety_buffer_fraction: f64,
    ) -> Result<Self, VehicleProfileError> {
        if !tank_capacity_gallons.is_finite() || tank_capacity_gallons < 0.0 {
            return Err(VehicleProfileError::InvalidTankCapacity(
                tank_capacity_gallons,
            ));
        }
        if !fuel_efficiency_mpg.is_finite() || fuel_efficiency_mpg < 0.0 {
            return Err(VehicleProfileError::InvalidFuelEfficiency(
                fuel_efficiency_mpg,
            ));
        }
        check_fraction("current fuel level", current_fuel_level)?;
        check_fraction("safety buffer", safety_buffer_fraction)?;
        Ok(Self {
            tank_capacity_gallons,
            fuel_efficiency_mpg,
            current_fuel_level,
            safety_buffer_fraction,
        })
    }

    /// Tank capacity in gallons.
    #[must_use]
    pub const fn tank_capacity_gallons(&self) -> f64 {
        self.tank_capacity_gallons
    }

    /// Miles covered per gallon.
    #[must_use]
    pub const fn fuel_efficiency_mpg(&self) -> f64 {
        self.fuel_efficiency_mpg
    }

    /// Fraction of the tank currently filled.
    #[must_use]
    pub const fn current_fuel_level(&self) -> f64 {
        self.current_fuel_level
    }

    /// Fuel level at or below which the tank counts as low.
    #[must_use]
    pub const fn safety_buffer_fraction(&self) -> f64 {
        self.safety_buffer_fraction
    }

    /// Miles the vehicle can cover on the fuel left in the tank.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "range is gallons multiplied by miles per gallon"
    )]
    pub fn remaining_range_miles(&self) -> f64 {
        self.tank_capacity_gallons * self.current_fuel_level * self.fuel_efficiency_mpg
    }

    /// Report whether the fuel level has dropped into the safety buffer.
    #[must_use]
    pub fn is_fuel_low(&self) -> bool {
        self.current_fuel_level <= self.safety_buffer_fraction
    }
}

/// Unvalidated wire form of [`VehicleProfile`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VehicleProfileFields {
    tank_capacity_gallons: f64,
    fuel_efficiency_mpg: f64,
    current_fuel_level: f64,
    safety_buffer_fraction: f64,
}

#[cfg(feature = "serde")]
impl Default for VehicleProfileFields {
    fn default() -> Self {
        let profile = VehicleProfile::default();
        Self {
            tank_capacity_gallons: profile.tank_capacity_gallons,
            fuel_efficiency_mpg: profile.fuel_efficiency_mpg,
            current_fuel_level: profile.current_fuel_level,
            safety_buffer_fraction: profile.safety_buffer_fraction,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<VehicleProfileFields> for VehicleProfile {
    type Error = VehicleProfileError;

    fn try_from(fields: VehicleProfileFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.tank_capacity_gallons,
            fields.fuel_efficiency_mpg,
            fields.current_fuel_level,
            fields.safety_buffer_fraction,
        )
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<(), VehicleProfileError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(VehicleProfileError::InvalidFraction { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_profile_has_a_full_tank() {
        let car = VehicleProfile::default();
        assert_eq!(car.remaining_range_miles(), 420.0);
        assert!(!car.is_fuel_low());
    }

    #[rstest]
    #[case(0.2, true)]
    #[case(0.1, true)]
    #[case(0.21, false)]
    fn fuel_is_low_inside_the_buffer(#[case] level: f64, #[case] low: bool) {
        let car = VehicleProfile::new(14.0, 30.0, level, 0.2).expect("valid profile");
        assert_eq!(car.is_fuel_low(), low);
    }

    #[rstest]
    #[case(-1.0, 30.0, 0.5, 0.2)]
    #[case(14.0, f64::NAN, 0.5, 0.2)]
    #[case(14.0, 30.0, 1.5, 0.2)]
    #[case(14.0, 30.0, 0.5, -0.1)]
    fn rejects_invalid_profiles(
        #[case] tank: f64,
        #[case] mpg: f64,
        #[case] level: f64,
        #[case] buffer: f64,
    ) {
        assert!(VehicleProfile::new(tank, mpg, level, buffer).is_err());
    }

    #[rstest]
    fn names_the_offending_fraction() {
        let err = VehicleProfile::new(14.0, 30.0, 2.0, 0.2).expect_err("level out of range");
        assert_eq!(
            err,
            VehicleProfileError::InvalidFraction {
                field: "current fuel level",
                value: 2.0,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_fills_defaults_and_validates() {
        let car: VehicleProfile = serde_json::from_str(r#"{ "current_fuel_level": 0.5 }"#)
            .expect("partial profile should deserialise");
        assert_eq!(car.tank_capacity_gallons(), 14.0);
        assert_eq!(car.remaining_range_miles(), 210.0);

        let err = serde_json::from_str::<VehicleProfile>(r#"{ "safety_buffer_fraction": 1.5 }"#)
            .expect_err("out-of-range buffer should be rejected");
        assert!(err.to_string().contains("safety buffer 1.5 must be between 0.0 and 1.0"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialised_profile_reads_back() {
        let car = VehicleProfile::new(12.0, 25.0, 0.4, 0.1).expect("valid profile");
        let json = serde_json::to_string(&car).expect("profile should serialise");
        let restored: VehicleProfile = serde_json::from_str(&json).expect("profile should parse");
        assert_eq!(restored, car);
    }
}
