//! Threshold-gated nearest-stop recommenders.
//!
//! Every recommender runs the same pipeline: check its [`Admission`] gate,
//! compute the haversine distance to each candidate, keep those within the
//! fuel range, sort ascending by distance and truncate. Sorting is stable, so
//! stops at equal distance keep their input order.

use geo::Coord;
use log::debug;

use crate::{
    MergeOrder, PoiCatalogue, PointOfInterest, Recommendation, RecommendConfig, TripState,
    haversine_miles, merge_recommendations,
};

/// Category-specific gate checked before any distance is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// Always open; used for gas stations.
    Always,
    /// Open once `hours_driven >= threshold_hours`; used for rest stops.
    RestAfter {
        /// Hours the traveller has driven.
        hours_driven: f64,
        /// Hours required before resting is suggested.
        threshold_hours: f64,
    },
    /// Open only at night; used for hotels and motels.
    NightOnly {
        /// Whether it is currently night.
        is_night: bool,
    },
}

impl Admission {
    /// Report whether the gate admits candidates.
    ///
    /// # Examples
    /// ```
    /// use waystop_core::Admission;
    ///
    /// assert!(Admission::Always.is_open());
    /// assert!(!Admission::RestAfter { hours_driven: 2.0, threshold_hours: 3.0 }.is_open());
    /// assert!(Admission::NightOnly { is_night: true }.is_open());
    /// ```
    #[must_use]
    pub const fn is_open(self) -> bool {
        match self {
            Self::Always => true,
            Self::RestAfter {
                hours_driven,
                threshold_hours,
            } => hours_driven >= threshold_hours,
            Self::NightOnly { is_night } => is_night,
        }
    }
}

/// Return up to `limit` stops within `fuel_range_miles` of `position`,
/// closest first, provided `admission` is open.
///
/// A closed gate yields an empty list without computing any distance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{Admission, Category, PointOfInterest, recommend_within};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let near = PointOfInterest::new("near", Coord { x: 0.5, y: 0.0 }, Category::Fuel);
/// let far = PointOfInterest::new("far", Coord { x: 5.0, y: 0.0 }, Category::Fuel);
///
/// let recs = recommend_within(origin, 100.0, &[far, near], 10, Admission::Always);
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].name, "near");
/// ```
#[must_use]
pub fn recommend_within<'a, I>(
    position: Coord<f64>,
    fuel_range_miles: f64,
    pois: I,
    limit: usize,
    admission: Admission,
) -> Vec<Recommendation>
where
    I: IntoIterator<Item = &'a PointOfInterest>,
{
    if !admission.is_open() {
        return Vec::new();
    }
    let mut admitted: Vec<Recommendation> = pois
        .into_iter()
        .filter_map(|poi| {
            let distance = haversine_miles(position, poi.location);
            (distance <= fuel_range_miles).then(|| Recommendation::from_poi(poi, distance))
        })
        .collect();
    admitted.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    admitted.truncate(limit);
    admitted
}

/// Recommend the closest gas stations within fuel range.
#[must_use]
pub fn recommend_gas(
    position: Coord<f64>,
    fuel_range_miles: f64,
    gas_stations: &[PointOfInterest],
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    recommend_within(
        position,
        fuel_range_miles,
        gas_stations,
        config.max_results,
        Admission::Always,
    )
}

/// Recommend the closest rest stops within fuel range once the traveller has
/// driven for at least `config.rest_threshold_hours`.
#[must_use]
pub fn recommend_rest(
    position: Coord<f64>,
    fuel_range_miles: f64,
    hours_driven: f64,
    rest_stops: &[PointOfInterest],
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    recommend_within(
        position,
        fuel_range_miles,
        rest_stops,
        config.max_results,
        Admission::RestAfter {
            hours_driven,
            threshold_hours: config.rest_threshold_hours,
        },
    )
}

/// Recommend the closest hotels and motels within fuel range, at night only.
///
/// Use [`parse_night_answer`](crate::parse_night_answer) to derive
/// `is_night` from a free-text answer.
#[must_use]
pub fn recommend_hotel(
    position: Coord<f64>,
    fuel_range_miles: f64,
    lodging: &[PointOfInterest],
    is_night: bool,
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    recommend_within(
        position,
        fuel_range_miles,
        lodging,
        config.max_results,
        Admission::NightOnly { is_night },
    )
}

/// Per-category output of [`recommend_for_trip`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripRecommendations {
    /// Gas stations, closest first.
    pub gas: Vec<Recommendation>,
    /// Rest stops, closest first.
    pub rest: Vec<Recommendation>,
    /// Hotels and motels, closest first.
    pub lodging: Vec<Recommendation>,
}

impl TripRecommendations {
    /// Report whether no category produced a stop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gas.is_empty() && self.rest.is_empty() && self.lodging.is_empty()
    }

    /// Merge the categories into one list capped at `limit`.
    #[must_use]
    pub fn merge(self, order: MergeOrder, limit: usize) -> Vec<Recommendation> {
        merge_recommendations(self.lodging, self.rest, self.gas, order, limit)
    }
}

/// Run all three recommenders for `trip` against `catalogue`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{
///     Category, PoiCatalogue, PointOfInterest, RecommendConfig, TripState, recommend_for_trip,
/// };
///
/// # fn main() -> Result<(), waystop_core::TripStateError> {
/// let catalogue = PoiCatalogue {
///     gas: vec![PointOfInterest::unnamed(Coord { x: 1.0, y: 0.0 }, Category::Fuel)],
///     rest: vec![PointOfInterest::unnamed(Coord { x: 0.5, y: 0.0 }, Category::Rest)],
///     lodging: Vec::new(),
/// };
/// let trip = TripState::new(Coord { x: 0.0, y: 0.0 }, 100.0, 1.0, false)?;
/// let recs = recommend_for_trip(&trip, &catalogue, &RecommendConfig::default());
///
/// assert_eq!(recs.gas.len(), 1);
/// assert!(recs.rest.is_empty());
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn recommend_for_trip(
    trip: &TripState,
    catalogue: &PoiCatalogue,
    config: &RecommendConfig,
) -> TripRecommendations {
    let position = trip.position();
    let range = trip.fuel_range_miles();
    let recommendations = TripRecommendations {
        gas: recommend_gas(position, range, &catalogue.gas, config),
        rest: recommend_rest(position, range, trip.hours_driven(), &catalogue.rest, config),
        lodging: recommend_hotel(
            position,
            range,
            &catalogue.lodging,
            trip.is_night(),
            config,
        ),
    };
    debug!(
        "recommended {} gas, {} rest, {} lodging stops within {range} miles",
        recommendations.gas.len(),
        recommendations.rest.len(),
        recommendations.lodging.len(),
    );
    recommendations
}
