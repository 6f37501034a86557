//! Tunable thresholds shared by the recommenders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MergeOrder;

/// Hours of driving after which rest stops are suggested.
pub const DEFAULT_REST_THRESHOLD_HOURS: f64 = 3.0;

/// Maximum number of stops returned by each recommender and by the merge.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Configuration threaded through every recommender call.
///
/// # Examples
/// ```
/// use waystop_core::{MergeOrder, RecommendConfig};
///
/// let config = RecommendConfig::default();
/// assert_eq!(config.rest_threshold_hours, 3.0);
/// assert_eq!(config.max_results, 10);
/// assert_eq!(config.merge_order, MergeOrder::ByDistance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RecommendConfig {
    /// Minimum hours driven before rest stops are admitted.
    pub rest_threshold_hours: f64,
    /// Cap applied to each category's output.
    pub max_results: usize,
    /// Cap applied to the merged list handed to presentation.
    pub merged_limit: usize,
    /// How per-category outputs are combined.
    pub merge_order: MergeOrder,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            rest_threshold_hours: DEFAULT_REST_THRESHOLD_HOURS,
            max_results: DEFAULT_MAX_RESULTS,
            merged_limit: DEFAULT_MAX_RESULTS,
            merge_order: MergeOrder::default(),
        }
    }
}

impl RecommendConfig {
    /// Override the rest threshold.
    #[must_use]
    pub const fn with_rest_threshold_hours(mut self, hours: f64) -> Self {
        self.rest_threshold_hours = hours;
        self
    }

    /// Override both the per-category and merged caps.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.max_results = limit;
        self.merged_limit = limit;
        self
    }

    /// Override the merge order.
    #[must_use]
    pub const fn with_merge_order(mut self, order: MergeOrder) -> Self {
        self.merge_order = order;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_fields_take_defaults() {
        let config: RecommendConfig =
            serde_json::from_str(r#"{"rest_threshold_hours": 4.5}"#).expect("parse config");
        assert_eq!(config.rest_threshold_hours, 4.5);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.merge_order, MergeOrder::ByDistance);
    }

    #[rstest]
    fn merge_order_uses_kebab_case() {
        let config: RecommendConfig =
            serde_json::from_str(r#"{"merge_order": "grouped"}"#).expect("parse config");
        assert_eq!(config.merge_order, MergeOrder::Grouped);
    }
}
