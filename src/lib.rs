//! Facade crate for the Waystop roadside stop recommender.
//!
//! This crate re-exports the core domain types and recommenders, and exposes
//! the CSV point-of-interest loader behind the `csv` feature.

#![forbid(unsafe_code)]

pub use waystop_core::{
    Admission, Category, DEFAULT_MAX_RESULTS, DEFAULT_REST_THRESHOLD_HOURS, EARTH_RADIUS_MILES,
    EVENING_LODGING_HOUR, MergeOrder, PoiCatalogue, PoiSource, PointOfInterest, RecommendConfig,
    Recommendation, RecommendationSet, StopGroup, TimeOfDay, Trigger, TripRecommendations,
    TripState, TripStateError, VehicleProfile, VehicleProfileError, haversine_miles,
    is_night_hour, merge_recommendations, parse_night_answer, recommend_for_trip, recommend_gas,
    recommend_hotel, recommend_rest, recommend_within, recommendation_sets,
};

#[cfg(feature = "csv")]
pub use waystop_data::{CsvPoiSource, LoadPoisError, load_pois, read_pois};

#[cfg(feature = "test-support")]
pub use waystop_core::test_support;
