//! Combine per-category recommendations into one capped list.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Recommendation;

/// Ordering applied when merging lodging, rest and gas recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MergeOrder {
    /// Sort all stops by distance before truncating, so the closest stops
    /// survive the cap whatever their category.
    #[default]
    ByDistance,
    /// Keep lodging, then rest, then gas, and truncate without re-sorting.
    /// Later categories can be dropped entirely when earlier ones fill the
    /// cap.
    Grouped,
}

impl MergeOrder {
    /// Return the order as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByDistance => "by-distance",
            Self::Grouped => "grouped",
        }
    }
}

impl std::fmt::Display for MergeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MergeOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "by-distance" | "distance" => Ok(Self::ByDistance),
            "grouped" | "category" => Ok(Self::Grouped),
            _ => Err(format!("unknown merge order '{s}'")),
        }
    }
}

/// Merge category outputs into a single list of at most `limit` entries.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waystop_core::{Category, MergeOrder, PointOfInterest, Recommendation, merge_recommendations};
///
/// let rec = |miles: f64, category: Category| {
///     Recommendation::from_poi(&PointOfInterest::unnamed(Coord { x: 0.0, y: 0.0 }, category), miles)
/// };
/// let lodging = vec![rec(9.0, Category::Hotel)];
/// let gas = vec![rec(1.0, Category::Fuel)];
///
/// let merged = merge_recommendations(lodging, Vec::new(), gas, MergeOrder::ByDistance, 10);
/// assert_eq!(merged[0].category, Category::Fuel);
/// ```
#[must_use]
pub fn merge_recommendations(
    lodging: Vec<Recommendation>,
    rest: Vec<Recommendation>,
    gas: Vec<Recommendation>,
    order: MergeOrder,
    limit: usize,
) -> Vec<Recommendation> {
    let mut merged = lodging;
    merged.extend(rest);
    merged.extend(gas);
    if order == MergeOrder::ByDistance {
        merged.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    }
    merged.truncate(limit);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, PointOfInterest};
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn rec(name: &str, miles: f64, category: Category) -> Recommendation {
        let poi = PointOfInterest::new(name, Coord { x: 0.0, y: 0.0 }, category);
        Recommendation::from_poi(&poi, miles)
    }

    #[fixture]
    fn lodging() -> Vec<Recommendation> {
        (0_u8..6)
            .map(|i| rec(&format!("hotel-{i}"), 20.0 + f64::from(i), Category::Hotel))
            .collect()
    }

    #[fixture]
    fn rest() -> Vec<Recommendation> {
        (0_u8..6)
            .map(|i| rec(&format!("rest-{i}"), 10.0 + f64::from(i), Category::Rest))
            .collect()
    }

    #[fixture]
    fn gas() -> Vec<Recommendation> {
        (0_u8..3)
            .map(|i| rec(&format!("gas-{i}"), 1.0 + f64::from(i), Category::Fuel))
            .collect()
    }

    #[rstest]
    fn by_distance_keeps_the_closest_stops(
        lodging: Vec<Recommendation>,
        rest: Vec<Recommendation>,
        gas: Vec<Recommendation>,
    ) {
        let merged = merge_recommendations(lodging, rest, gas, MergeOrder::ByDistance, 10);
        assert_eq!(merged.len(), 10);
        let names: Vec<_> = merged.iter().take(3).map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["gas-0", "gas-1", "gas-2"]);
        assert!(
            merged
                .windows(2)
                .all(|w| w[0].distance_miles <= w[1].distance_miles)
        );
    }

    #[rstest]
    fn grouped_keeps_category_order_and_can_drop_gas(
        lodging: Vec<Recommendation>,
        rest: Vec<Recommendation>,
        gas: Vec<Recommendation>,
    ) {
        let merged = merge_recommendations(lodging, rest, gas, MergeOrder::Grouped, 10);
        assert_eq!(merged.len(), 10);
        assert!(merged.iter().take(6).all(|r| r.category == Category::Hotel));
        assert!(merged.iter().skip(6).all(|r| r.category == Category::Rest));
        assert!(merged.iter().all(|r| r.category != Category::Fuel));
    }

    #[rstest]
    fn empty_inputs_merge_to_empty() {
        let merged =
            merge_recommendations(Vec::new(), Vec::new(), Vec::new(), MergeOrder::Grouped, 10);
        assert!(merged.is_empty());
    }

    #[rstest]
    #[case("by-distance", MergeOrder::ByDistance)]
    #[case("Grouped", MergeOrder::Grouped)]
    fn parses_merge_order(#[case] raw: &str, #[case] expected: MergeOrder) {
        assert_eq!(raw.parse::<MergeOrder>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_merge_order() {
        assert!("shuffled".parse::<MergeOrder>().is_err());
    }
}
