//! Validated trip parameters supplied by the traveller.
//!
//! The recommenders assume well-formed input. [`TripState::new`] is the
//! boundary where raw numbers are checked before any computation runs.

use geo::Coord;
use thiserror::Error;

/// Errors returned by [`TripState::new`].
#[derive(Debug, Error, PartialEq)]
pub enum TripStateError {
    /// Latitude was non-finite or outside `-90..=90`.
    #[error("latitude {0} must be a finite value between -90 and 90 degrees")]
    InvalidLatitude(f64),
    /// Longitude was non-finite or outside `-180..=180`.
    #[error("longitude {0} must be a finite value between -180 and 180 degrees")]
    InvalidLongitude(f64),
    /// Fuel range was negative or non-finite.
    #[error("fuel range {0} must be a finite, non-negative number of miles")]
    InvalidFuelRange(f64),
    /// Hours driven was negative or non-finite.
    #[error("hours driven {0} must be a finite, non-negative number")]
    InvalidHoursDriven(f64),
}

/// Current position and trip progress for one recommendation request.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::TripState;
///
/// # fn main() -> Result<(), waystop_core::TripStateError> {
/// let trip = TripState::new(Coord { x: -117.75, y: 33.51 }, 120.0, 3.5, false)?;
/// assert_eq!(trip.fuel_range_miles(), 120.0);
/// assert!(!trip.is_night());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripState {
    position: Coord<f64>,
    fuel_range_miles: f64,
    hours_driven: f64,
    is_night: bool,
}

impl TripState {
    /// Validate and construct a [`TripState`].
    ///
    /// # Errors
    /// Returns [`TripStateError`] when a coordinate is out of range or a
    /// distance or duration is negative or non-finite.
    pub fn new(
        position: Coord<f64>,
        fuel_range_miles: f64,
        hours_driven: f64,
        is_night: bool,
    ) -> Result<Self, TripStateError> {
        if !position.y.is_finite() || !(-90.0..=90.0).contains(&position.y) {
            return Err(TripStateError::InvalidLatitude(position.y));
        }
        if !position.x.is_finite() || !(-180.0..=180.0).contains(&position.x) {
            return Err(TripStateError::InvalidLongitude(position.x));
        }
        if !fuel_range_miles.is_finite() || fuel_range_miles < 0.0 {
            return Err(TripStateError::InvalidFuelRange(fuel_range_miles));
        }
        if !hours_driven.is_finite() || hours_driven < 0.0 {
            return Err(TripStateError::InvalidHoursDriven(hours_driven));
        }
        Ok(Self {
            position,
            fuel_range_miles,
            hours_driven,
            is_night,
        })
    }

    /// Traveller position (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn position(&self) -> Coord<f64> {
        self.position
    }

    /// Remaining fuel range in miles; the admission radius.
    #[must_use]
    pub const fn fuel_range_miles(&self) -> f64 {
        self.fuel_range_miles
    }

    /// Hours already driven.
    #[must_use]
    pub const fn hours_driven(&self) -> f64 {
        self.hours_driven
    }

    /// Whether it is currently night.
    #[must_use]
    pub const fn is_night(&self) -> bool {
        self.is_night
    }
}
