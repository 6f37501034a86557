//! Core domain types and recommenders for the Waystop engine.
//!
//! Given a traveller's position, remaining fuel range, hours driven and
//! whether it is night, the recommenders scan static lists of gas stations,
//! rest stops and lodging, keep those within fuel range, and return the
//! closest matches per category.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use waystop_core::{Category, PointOfInterest, RecommendConfig, recommend_gas};
//!
//! let stations = vec![
//!     PointOfInterest::new("Chevron", Coord { x: 1.0, y: 0.0 }, Category::Fuel),
//!     PointOfInterest::new("Shell", Coord { x: 3.0, y: 0.0 }, Category::Fuel),
//! ];
//! let recs = recommend_gas(Coord { x: 0.0, y: 0.0 }, 100.0, &stations, &RecommendConfig::default());
//!
//! assert_eq!(recs.len(), 1);
//! assert_eq!(recs[0].name, "Chevron");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod config;
mod distance;
mod merge;
mod poi;
mod recommend;
mod recommendation;
mod source;
mod time_of_day;
mod trigger;
mod trip;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::Category;
pub use config::{DEFAULT_MAX_RESULTS, DEFAULT_REST_THRESHOLD_HOURS, RecommendConfig};
pub use distance::{EARTH_RADIUS_MILES, haversine_miles};
pub use merge::{MergeOrder, merge_recommendations};
pub use poi::PointOfInterest;
pub use recommend::{
    Admission, TripRecommendations, recommend_for_trip, recommend_gas, recommend_hotel,
    recommend_rest, recommend_within,
};
pub use recommendation::Recommendation;
pub use source::{PoiCatalogue, PoiSource};
pub use time_of_day::{EVENING_LODGING_HOUR, TimeOfDay, is_night_hour, parse_night_answer};
pub use trigger::{RecommendationSet, StopGroup, Trigger, recommendation_sets};
pub use trip::{TripState, TripStateError};
pub use vehicle::{VehicleProfile, VehicleProfileError};
