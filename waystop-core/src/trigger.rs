//! Recommendation groups annotated with the reason they were raised.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    PoiCatalogue, Recommendation, RecommendConfig, TripState, VehicleProfile, recommend_for_trip,
};

/// Which recommender produced a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum StopGroup {
    /// Gas stations.
    Gas,
    /// Rest stops.
    Rest,
    /// Hotels and motels.
    Lodging,
}

/// Why a group of stops is being suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Trigger {
    /// The tank is inside the vehicle's safety buffer.
    LowFuel,
    /// Stops are listed because the traveller asked.
    UserRequest,
    /// The rest threshold has been reached.
    DrivingDuration,
    /// It is night.
    EveningLodging,
}

/// A non-empty group of stops from one recommender.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationSet {
    /// Producing recommender.
    pub group: StopGroup,
    /// Reason the group was raised.
    pub trigger: Trigger,
    /// Sentence explaining the trigger to the traveller.
    pub reason: String,
    /// Stops, closest first.
    pub stops: Vec<Recommendation>,
}

/// Build the annotated groups for `trip`, in gas, rest, lodging order.
///
/// Empty groups are omitted. When a `vehicle` is known and
/// [`VehicleProfile::is_fuel_low`] holds, the gas group is flagged
/// [`Trigger::LowFuel`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{
///     Category, PoiCatalogue, PointOfInterest, RecommendConfig, StopGroup, Trigger, TripState,
///     VehicleProfile, recommendation_sets,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalogue = PoiCatalogue {
///     gas: vec![PointOfInterest::unnamed(Coord { x: 0.1, y: 0.0 }, Category::Fuel)],
///     ..PoiCatalogue::default()
/// };
/// let car = VehicleProfile::new(14.0, 30.0, 0.1, 0.2)?;
/// let trip = TripState::new(Coord { x: 0.0, y: 0.0 }, car.remaining_range_miles(), 0.5, false)?;
/// let sets = recommendation_sets(&trip, &catalogue, &RecommendConfig::default(), Some(&car));
///
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].group, StopGroup::Gas);
/// assert_eq!(sets[0].trigger, Trigger::LowFuel);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn recommendation_sets(
    trip: &TripState,
    catalogue: &PoiCatalogue,
    config: &RecommendConfig,
    vehicle: Option<&VehicleProfile>,
) -> Vec<RecommendationSet> {
    let recommendations = recommend_for_trip(trip, catalogue, config);
    let mut sets = Vec::with_capacity(3);

    if !recommendations.gas.is_empty() {
        let low_fuel = vehicle.is_some_and(VehicleProfile::is_fuel_low);
        let (trigger, reason) = if low_fuel {
            (Trigger::LowFuel, "Fuel level is getting low")
        } else {
            (Trigger::UserRequest, "Nearby gas stations")
        };
        sets.push(RecommendationSet {
            group: StopGroup::Gas,
            trigger,
            reason: reason.to_owned(),
            stops: recommendations.gas,
        });
    }

    if !recommendations.rest.is_empty() {
        sets.push(RecommendationSet {
            group: StopGroup::Rest,
            trigger: Trigger::DrivingDuration,
            reason: format!(
                "You've been driving for {:.1} hours",
                trip.hours_driven()
            ),
            stops: recommendations.rest,
        });
    }

    if !recommendations.lodging.is_empty() {
        sets.push(RecommendationSet {
            group: StopGroup::Lodging,
            trigger: Trigger::EveningLodging,
            reason: "It's getting late, consider stopping for the night".to_owned(),
            stops: recommendations.lodging,
        });
    }

    sets
}
