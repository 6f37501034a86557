//! Time-of-day helpers deciding whether lodging should be suggested.
//!
//! Two entry points exist. [`parse_night_answer`] maps the traveller's
//! free-text answer onto a boolean, and [`is_night_hour`] derives the same
//! flag from a wall-clock hour.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hour from which lodging is always considered, regardless of the period.
pub const EVENING_LODGING_HOUR: u8 = 20;

/// Broad period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TimeOfDay {
    /// 05:00 to 10:59.
    Morning,
    /// 11:00 to 13:59.
    Midday,
    /// 14:00 to 16:59.
    Afternoon,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Classify a 24-hour clock hour. Values above 23 wrap.
    ///
    /// # Examples
    /// ```
    /// use waystop_core::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
    /// assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "hours wrap around the 24-hour clock"
    )]
    pub const fn from_hour(hour: u8) -> Self {
        match hour % 24 {
            5..=10 => Self::Morning,
            11..=13 => Self::Midday,
            14..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

/// Report whether `hour` counts as night for lodging purposes.
///
/// Night starts at [`EVENING_LODGING_HOUR`] and lasts until morning.
///
/// # Examples
/// ```
/// use waystop_core::is_night_hour;
///
/// assert!(is_night_hour(20));
/// assert!(is_night_hour(3));
/// assert!(!is_night_hour(19));
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "hours wrap around the 24-hour clock"
)]
pub const fn is_night_hour(hour: u8) -> bool {
    hour % 24 >= EVENING_LODGING_HOUR || matches!(TimeOfDay::from_hour(hour), TimeOfDay::Night)
}

/// Map a free-text "is it night?" answer onto a boolean.
///
/// Only the exact answer `"no"` means daytime. Every other answer, including
/// `"yes"`, `"No"`, an empty string or a typo, means night. The permissive
/// default suggests lodging whenever the answer is unclear; callers that can
/// collect a real boolean should do so instead.
///
/// # Examples
/// ```
/// use waystop_core::parse_night_answer;
///
/// assert!(!parse_night_answer("no"));
/// assert!(parse_night_answer("yes"));
/// assert!(parse_night_answer("maybe"));
/// ```
#[must_use]
pub fn parse_night_answer(answer: &str) -> bool {
    answer != "no"
}
