//! Access to the point-of-interest lists consumed by the recommenders.
//!
//! The core never reads files. A [`PoiSource`] yields a fully materialised
//! [`PoiCatalogue`] and the recommenders scan it linearly.

use crate::PointOfInterest;

/// Stops grouped by the recommender that consumes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiCatalogue {
    /// Candidates for [`recommend_gas`](crate::recommend_gas).
    pub gas: Vec<PointOfInterest>,
    /// Candidates for [`recommend_rest`](crate::recommend_rest).
    pub rest: Vec<PointOfInterest>,
    /// Candidates for [`recommend_hotel`](crate::recommend_hotel).
    pub lodging: Vec<PointOfInterest>,
}

impl PoiCatalogue {
    /// Total number of stops across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gas.len() + self.rest.len() + self.lodging.len()
    }

    /// Report whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gas.is_empty() && self.rest.is_empty() && self.lodging.is_empty()
    }
}

/// Read-only provider of a [`PoiCatalogue`].
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use geo::Coord;
/// use waystop_core::{Category, PoiCatalogue, PoiSource, PointOfInterest};
///
/// struct Fixed(PoiCatalogue);
///
/// impl PoiSource for Fixed {
///     type Error = Infallible;
///
///     fn load_catalogue(&self) -> Result<PoiCatalogue, Self::Error> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let station = PointOfInterest::unnamed(Coord { x: 0.0, y: 0.0 }, Category::Fuel);
/// let source = Fixed(PoiCatalogue { gas: vec![station], ..PoiCatalogue::default() });
/// let Ok(catalogue) = source.load_catalogue();
/// assert_eq!(catalogue.len(), 1);
/// ```
pub trait PoiSource {
    /// Failure raised while reading the underlying data.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every stop, grouped by recommender.
    ///
    /// # Errors
    /// Returns the implementation's error when the data cannot be read or a
    /// record is malformed. Partial catalogues are never returned.
    fn load_catalogue(&self) -> Result<PoiCatalogue, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemorySource, stations_along_equator, stop_at};
    use crate::{Category, RecommendConfig, TripState, recommend_for_trip};
    use geo::Coord;
    use rstest::rstest;

    #[rstest]
    fn catalogue_counts_every_group() {
        let catalogue = PoiCatalogue {
            gas: stations_along_equator(3, 0.1),
            rest: vec![stop_at("Vista Point", 0.5, 0.0, Category::Rest)],
            lodging: Vec::new(),
        };
        assert_eq!(catalogue.len(), 4);
        assert!(!catalogue.is_empty());
        assert!(PoiCatalogue::default().is_empty());
    }

    #[rstest]
    fn memory_source_feeds_the_recommenders() {
        let source = MemorySource::with_gas(stations_along_equator(3, 0.5));
        let Ok(catalogue) = source.load_catalogue();
        let trip = TripState::new(Coord { x: 0.0, y: 0.0 }, 50.0, 0.0, false)
            .expect("valid trip");

        let recommendations = recommend_for_trip(&trip, &catalogue, &RecommendConfig::default());
        let names: Vec<_> = recommendations.gas.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["station-1"]);
        assert!(recommendations.rest.is_empty());
        assert!(recommendations.lodging.is_empty());
    }
}
