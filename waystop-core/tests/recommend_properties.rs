//! Property-based tests for the distance function and recommenders.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Identity:** `distance(p, p) == 0`.
//! - **Threshold:** every recommendation lies within the fuel range and
//!   nothing within range is skipped unless the cap was reached.
//! - **Cardinality:** at most `max_results` recommendations.
//! - **Ordering:** distances never decrease along the output.
//! - **Gating:** rest output is empty exactly when the threshold is unmet;
//!   hotel output is empty exactly when the night answer is `"no"`.

use geo::Coord;
use proptest::prelude::*;
use waystop_core::{
    Category, PointOfInterest, RecommendConfig, haversine_miles, parse_night_answer,
    recommend_gas, recommend_hotel, recommend_rest,
};

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(y, x)| Coord { x, y })
}

/// Stops scattered within a few degrees of the origin.
fn stops_strategy(category: Category) -> impl Strategy<Value = Vec<PointOfInterest>> {
    prop::collection::vec((-3.0_f64..=3.0, -3.0_f64..=3.0), 0..40).prop_map(move |points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (y, x))| {
                PointOfInterest::new(format!("stop-{i}"), Coord { x, y }, category.clone())
            })
            .collect()
    })
}

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert_eq!(haversine_miles(a, b), haversine_miles(b, a));
    }

    #[test]
    fn distance_to_self_is_zero(p in coord_strategy()) {
        prop_assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[test]
    fn distance_is_finite_and_non_negative(a in coord_strategy(), b in coord_strategy()) {
        let miles = haversine_miles(a, b);
        prop_assert!(miles.is_finite());
        prop_assert!(miles >= 0.0);
    }

    #[test]
    fn gas_output_is_bounded_sorted_and_in_range(
        stations in stops_strategy(Category::Fuel),
        fuel_range in 0.0_f64..=300.0,
    ) {
        let config = RecommendConfig::default();
        let recs = recommend_gas(ORIGIN, fuel_range, &stations, &config);

        prop_assert!(recs.len() <= config.max_results);
        prop_assert!(recs.iter().all(|r| r.distance_miles <= fuel_range));
        prop_assert!(recs.windows(2).all(|w| w[0].distance_miles <= w[1].distance_miles));

        let in_range = stations
            .iter()
            .filter(|s| haversine_miles(ORIGIN, s.location) <= fuel_range)
            .count();
        prop_assert_eq!(recs.len(), in_range.min(config.max_results));
    }

    #[test]
    fn rest_is_empty_exactly_below_threshold(
        stops in stops_strategy(Category::Rest),
        hours_driven in 0.0_f64..=10.0,
        threshold in 0.0_f64..=10.0,
    ) {
        let config = RecommendConfig::default().with_rest_threshold_hours(threshold);
        let recs = recommend_rest(ORIGIN, 1_000.0, hours_driven, &stops, &config);
        if hours_driven < threshold {
            prop_assert!(recs.is_empty());
        } else {
            prop_assert_eq!(recs.len(), stops.len().min(config.max_results));
        }
    }

    #[test]
    fn hotels_are_empty_only_for_a_literal_no(
        hotels in stops_strategy(Category::Hotel),
        answer in "[a-z]{0,5}",
    ) {
        let config = RecommendConfig::default();
        let recs = recommend_hotel(ORIGIN, 1_000.0, &hotels, parse_night_answer(&answer), &config);
        if answer == "no" {
            prop_assert!(recs.is_empty());
        } else {
            prop_assert_eq!(recs.len(), hotels.len().min(config.max_results));
        }
    }
}
