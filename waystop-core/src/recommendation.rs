//! Ranked stops produced by the recommenders.

use std::fmt;

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Category, PointOfInterest};

/// A point of interest admitted by a recommender, with its distance from the
/// traveller.
///
/// Recommendations are built fresh for every request and never mutated.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{Category, PointOfInterest, Recommendation};
///
/// let poi = PointOfInterest::unnamed(Coord { x: -117.7, y: 33.5 }, Category::Fuel);
/// let rec = Recommendation::from_poi(&poi, 2.34);
///
/// assert_eq!(rec.display_name(), "Gas Station");
/// assert_eq!(
///     rec.to_string(),
///     "Gas Station (2.3 miles away) Latitude: 33.500000 Longitude: -117.700000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recommendation {
    /// Name copied from the source POI, possibly empty.
    pub name: String,
    /// Great-circle distance from the query point in statute miles.
    pub distance_miles: f64,
    /// Coordinates copied from the source POI.
    pub location: Coord<f64>,
    /// Category copied from the source POI.
    pub category: Category,
}

impl Recommendation {
    /// Build a recommendation for `poi` at `distance_miles`.
    #[must_use]
    pub fn from_poi(poi: &PointOfInterest, distance_miles: f64) -> Self {
        Self {
            name: poi.name.clone(),
            distance_miles,
            location: poi.location,
            category: poi.category.clone(),
        }
    }

    /// Name to show the traveller: the POI name, or the category label when
    /// the name is empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.category.label()
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1} miles away) Latitude: {:.6} Longitude: {:.6}",
            self.display_name(),
            self.distance_miles,
            self.location.y,
            self.location.x,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Fuel, "Gas Station")]
    #[case(Category::Rest, "Rest Stop")]
    #[case(Category::Hotel, "Hotel")]
    #[case(Category::Motel, "Motel")]
    fn unnamed_stops_fall_back_to_category_label(#[case] category: Category, #[case] label: &str) {
        let poi = PointOfInterest::unnamed(Coord { x: 0.0, y: 0.0 }, category);
        assert_eq!(Recommendation::from_poi(&poi, 1.0).display_name(), label);
    }

    #[rstest]
    fn named_stops_keep_their_name() {
        let poi = PointOfInterest::new("Motel 6", Coord { x: 0.0, y: 0.0 }, Category::Motel);
        let rec = Recommendation::from_poi(&poi, 12.345);
        assert_eq!(rec.display_name(), "Motel 6");
        assert!(rec.to_string().starts_with("Motel 6 (12.3 miles away)"));
    }
}
