//! Point-of-interest loading for the Waystop engine.
//!
//! Responsibilities:
//! - Read gas station, rest stop and lodging lists from CSV files.
//! - Reject malformed records before they reach the recommenders.
//! - Implement [`PoiSource`](waystop_core::PoiSource) for file-backed
//!   catalogues.
//!
//! Boundaries:
//! - Do not encode recommendation rules (live in `waystop-core`).
//!
//! Invariants:
//! - A load either yields every record of every file or fails.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod csv_source;
mod error;

pub use csv_source::{
    CsvPoiSource, GAS_STATIONS_FILE, HOTELS_FILE, REST_STOPS_FILE, load_pois, read_pois,
};
pub use error::LoadPoisError;
