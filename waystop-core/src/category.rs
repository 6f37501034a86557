//! Categories of roadside stops.
//!
//! Source data tags each point of interest with a short free-form `type`.
//! The known tags map onto dedicated variants; anything else is preserved
//! verbatim in [`Category::Other`].
//!
//! # Examples
//! ```
//! use waystop_core::Category;
//!
//! assert_eq!(Category::from_tag("fuel"), Category::Fuel);
//! assert_eq!(Category::Motel.label(), "Motel");
//! assert_eq!(Category::from_tag("campsite").as_str(), "campsite");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of stop a point of interest represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Gas stations (`fuel`).
    Fuel,
    /// Rest stops and rest areas (`rest`).
    Rest,
    /// Hotels (`hotel`).
    Hotel,
    /// Motels (`motel`).
    Motel,
    /// Any other tag, kept as supplied.
    Other(String),
}

impl Category {
    /// Map a raw source tag onto a category.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let trimmed = tag.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fuel" => Self::Fuel,
            "rest" => Self::Rest,
            "hotel" => Self::Hotel,
            "motel" => Self::Motel,
            _ => Self::Other(trimmed.to_owned()),
        }
    }

    /// Return the tag used in source data.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fuel => "fuel",
            Self::Rest => "rest",
            Self::Hotel => "hotel",
            Self::Motel => "motel",
            Self::Other(tag) => tag,
        }
    }

    /// Human-readable label shown when a stop has no name.
    ///
    /// # Examples
    /// ```
    /// use waystop_core::Category;
    ///
    /// assert_eq!(Category::Fuel.label(), "Gas Station");
    /// assert_eq!(Category::Other("ev_charger".into()).label(), "ev_charger");
    /// ```
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Fuel => "Gas Station",
            Self::Rest => "Rest Stop",
            Self::Hotel => "Hotel",
            Self::Motel => "Motel",
            Self::Other(tag) => tag,
        }
    }

    /// Report whether the category is overnight lodging.
    #[must_use]
    pub const fn is_lodging(&self) -> bool {
        matches!(self, Self::Hotel | Self::Motel)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}
