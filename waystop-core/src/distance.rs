//! Great-circle distance between two WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used throughout the crate:
//! `x = longitude`, `y = latitude`, both in decimal degrees.

use geo::Coord;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Return the haversine distance between `from` and `to` in statute miles.
///
/// The intermediate `a` term is clamped to `0.0..=1.0` so rounding error on
/// near-antipodal points cannot push `asin` outside its domain. Coordinate
/// deltas are taken as magnitudes, so swapping the arguments yields the
/// bit-identical result.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use waystop_core::haversine_miles;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let miles = haversine_miles(origin, one_degree_east);
/// assert!((miles - 69.09).abs() < 0.01);
/// assert_eq!(haversine_miles(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_miles(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let phi_from = from.y.to_radians();
    let phi_to = to.y.to_radians();
    let delta_phi = (to.y - from.y).abs().to_radians();
    let delta_lambda = (to.x - from.x).abs().to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_from.cos() * phi_to.cos() * (delta_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * a.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn point(lat: f64, lon: f64) -> Coord<f64> {
        Coord { x: lon, y: lat }
    }

    #[rstest]
    #[case(point(0.0, 0.0))]
    #[case(point(33.507_61, -117.749_53))]
    #[case(point(-89.9, 179.9))]
    fn identical_points_are_zero_miles_apart(#[case] p: Coord<f64>) {
        assert_eq!(haversine_miles(p, p), 0.0);
    }

    #[rstest]
    fn one_degree_of_longitude_at_the_equator() {
        let miles = haversine_miles(point(0.0, 0.0), point(0.0, 1.0));
        assert!((miles - 69.0).abs() <= 0.5, "got {miles}");
    }

    #[rstest]
    fn one_degree_of_latitude_matches_one_degree_of_longitude_at_equator() {
        let north = haversine_miles(point(0.0, 0.0), point(1.0, 0.0));
        let east = haversine_miles(point(0.0, 0.0), point(0.0, 1.0));
        assert!((north - east).abs() < 1e-9);
    }

    #[rstest]
    fn antipodal_points_are_half_the_circumference_apart() {
        let miles = haversine_miles(point(0.0, 0.0), point(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_MILES;
        assert!(miles.is_finite());
        assert!((miles - half_circumference).abs() < 1e-6, "got {miles}");
    }

    #[rstest]
    fn pole_to_pole_does_not_overflow_the_asin_domain() {
        let miles = haversine_miles(point(90.0, 0.0), point(-90.0, 0.0));
        assert!(miles.is_finite());
        assert!(miles > 12_000.0);
    }

    #[rstest]
    fn distance_is_symmetric_for_a_known_pair() {
        let irvine = point(33.684_6, -117.826_5);
        let san_diego = point(32.715_7, -117.161_1);
        let there = haversine_miles(irvine, san_diego);
        let back = haversine_miles(san_diego, irvine);
        assert_eq!(there.to_bits(), back.to_bits());
        assert!((there - 77.2).abs() < 0.5, "got {there}");
    }
}
