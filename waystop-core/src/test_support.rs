//! Test-only, in-memory `PoiSource` implementation and stop builders used by
//! unit and behaviour tests across the workspace.

use std::convert::Infallible;

use geo::Coord;

use crate::{Category, PoiCatalogue, PoiSource, PointOfInterest};

/// In-memory `PoiSource` returning a fixed catalogue.
#[derive(Default, Debug, Clone)]
pub struct MemorySource {
    catalogue: PoiCatalogue,
}

impl MemorySource {
    /// Create a source from a prepared catalogue.
    #[must_use]
    pub const fn with_catalogue(catalogue: PoiCatalogue) -> Self {
        Self { catalogue }
    }

    /// Create a source holding only gas stations.
    pub fn with_gas<I>(stations: I) -> Self
    where
        I: IntoIterator<Item = PointOfInterest>,
    {
        Self::with_catalogue(PoiCatalogue {
            gas: stations.into_iter().collect(),
            ..PoiCatalogue::default()
        })
    }
}

impl PoiSource for MemorySource {
    type Error = Infallible;

    fn load_catalogue(&self) -> Result<PoiCatalogue, Self::Error> {
        Ok(self.catalogue.clone())
    }
}

/// Build a named stop at `lat`, `lon`.
pub fn stop_at(name: &str, lat: f64, lon: f64, category: Category) -> PointOfInterest {
    PointOfInterest::new(name, Coord { x: lon, y: lat }, category)
}

/// Build `count` gas stations strung out eastward from the origin along the
/// equator, `step_degrees` apart and returned furthest first.
#[expect(
    clippy::float_arithmetic,
    reason = "station longitudes are multiples of the step"
)]
pub fn stations_along_equator(count: u16, step_degrees: f64) -> Vec<PointOfInterest> {
    (1..=count)
        .rev()
        .map(|i| {
            stop_at(
                &format!("station-{i}"),
                0.0,
                f64::from(i) * step_degrees,
                Category::Fuel,
            )
        })
        .collect()
}
