use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

/// A roadside stop the traveller might visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// The name may be empty; presentation falls back to the category label.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{Category, PointOfInterest};
///
/// let poi = PointOfInterest::new("Shell", Coord { x: -117.75, y: 33.51 }, Category::Fuel);
///
/// assert_eq!(poi.name, "Shell");
/// assert_eq!(poi.latitude(), 33.51);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointOfInterest {
    /// Display name, possibly empty.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Kind of stop.
    pub category: Category,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest`.
    pub fn new(name: impl Into<String>, location: Coord<f64>, category: Category) -> Self {
        Self {
            name: name.into(),
            location,
            category,
        }
    }

    /// Construct an unnamed `PointOfInterest`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waystop_core::{Category, PointOfInterest};
    ///
    /// let poi = PointOfInterest::unnamed(Coord { x: 0.0, y: 0.0 }, Category::Rest);
    /// assert!(poi.name.is_empty());
    /// ```
    #[must_use]
    pub const fn unnamed(location: Coord<f64>, category: Category) -> Self {
        Self {
            name: String::new(),
            location,
            category,
        }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
