//! CSV-backed point-of-interest lists.
//!
//! Files carry a header row with the columns `name`, `@lat`, `@lon` and
//! `type`, as produced by Overpass CSV exports. Extra columns are ignored and
//! surrounding whitespace is trimmed. A missing `name` or `type` column reads
//! as empty.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use csv::{ReaderBuilder, StringRecord, Trim};
use geo::Coord;
use log::{info, warn};
use serde::Deserialize;
use waystop_core::{Category, PoiCatalogue, PoiSource, PointOfInterest};
use waystop_fs::open_utf8_file;

use crate::LoadPoisError;

/// Default file name for gas stations inside a data directory.
pub const GAS_STATIONS_FILE: &str = "gas_stations.csv";
/// Default file name for rest stops inside a data directory.
pub const REST_STOPS_FILE: &str = "rest_stops.csv";
/// Default file name for hotels and motels inside a data directory.
pub const HOTELS_FILE: &str = "hotels.csv";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: String,
    #[serde(rename = "@lat")]
    lat: f64,
    #[serde(rename = "@lon")]
    lon: f64,
    #[serde(rename = "type", default)]
    kind: String,
}

impl CsvRow {
    fn into_poi(self, origin: &str, line: u64) -> Result<PointOfInterest, LoadPoisError> {
        let invalid = |field, value| LoadPoisError::InvalidCoordinate {
            origin: origin.to_owned(),
            line,
            field,
            value,
        };
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid("@lat", self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(invalid("@lon", self.lon));
        }
        Ok(PointOfInterest::new(
            self.name,
            Coord {
                x: self.lon,
                y: self.lat,
            },
            Category::from_tag(&self.kind),
        ))
    }
}

/// Parse every record from `reader`, labelling errors with `origin`.
///
/// # Errors
/// Returns [`LoadPoisError::Read`] when the CSV structure is broken,
/// [`LoadPoisError::Parse`] when a record lacks a coordinate column or holds
/// a non-numeric coordinate, and [`LoadPoisError::InvalidCoordinate`] when a
/// coordinate is out of range.
///
/// # Examples
/// ```
/// use waystop_core::Category;
/// use waystop_data::read_pois;
///
/// let csv = "name,@lat,@lon,type\nShell,33.5,-117.7,fuel\n,33.6,-117.8,fuel\n";
/// let pois = read_pois(csv.as_bytes(), "inline").expect("valid csv");
///
/// assert_eq!(pois.len(), 2);
/// assert_eq!(pois[0].name, "Shell");
/// assert_eq!(pois[1].category, Category::Fuel);
/// ```
pub fn read_pois<R: Read>(reader: R, origin: &str) -> Result<Vec<PointOfInterest>, LoadPoisError> {
    let read_error = |source| LoadPoisError::Read {
        origin: origin.to_owned(),
        source,
    };
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers().map_err(read_error)?.clone();

    let mut pois = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record).map_err(read_error)? {
        let line = record.position().map_or(0, csv::Position::line);
        let row: CsvRow =
            record
                .deserialize(Some(&headers))
                .map_err(|source| LoadPoisError::Parse {
                    origin: origin.to_owned(),
                    line,
                    source,
                })?;
        pois.push(row.into_poi(origin, line)?);
    }
    Ok(pois)
}

/// Load every record from the CSV file at `path`.
///
/// # Errors
/// Returns [`LoadPoisError::Open`] when the file cannot be opened, and the
/// errors of [`read_pois`] otherwise.
pub fn load_pois(path: &Utf8Path) -> Result<Vec<PointOfInterest>, LoadPoisError> {
    let file = open_utf8_file(path).map_err(|source| LoadPoisError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pois = read_pois(std::io::BufReader::new(file), path.as_str())?;
    if pois.is_empty() {
        warn!("{path} contains no points of interest");
    } else {
        info!("Loaded {} points of interest from {path}", pois.len());
    }
    Ok(pois)
}

/// File-backed [`PoiSource`] reading one CSV file per recommender.
///
/// # Examples
/// ```
/// use camino::Utf8Path;
/// use waystop_data::CsvPoiSource;
///
/// let source = CsvPoiSource::from_dir(Utf8Path::new("public"));
/// assert_eq!(source.gas_stations(), Utf8Path::new("public/gas_stations.csv"));
/// assert_eq!(source.hotels(), Utf8Path::new("public/hotels.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPoiSource {
    gas_stations: Utf8PathBuf,
    rest_stops: Utf8PathBuf,
    hotels: Utf8PathBuf,
}

impl CsvPoiSource {
    /// Use explicit paths for each list.
    #[must_use]
    pub const fn new(gas_stations: Utf8PathBuf, rest_stops: Utf8PathBuf, hotels: Utf8PathBuf) -> Self {
        Self {
            gas_stations,
            rest_stops,
            hotels,
        }
    }

    /// Use the default file names inside `dir`.
    #[must_use]
    pub fn from_dir(dir: &Utf8Path) -> Self {
        Self::new(
            dir.join(GAS_STATIONS_FILE),
            dir.join(REST_STOPS_FILE),
            dir.join(HOTELS_FILE),
        )
    }

    /// Path of the gas station list.
    #[must_use]
    pub fn gas_stations(&self) -> &Utf8Path {
        &self.gas_stations
    }

    /// Path of the rest stop list.
    #[must_use]
    pub fn rest_stops(&self) -> &Utf8Path {
        &self.rest_stops
    }

    /// Path of the hotel and motel list.
    #[must_use]
    pub fn hotels(&self) -> &Utf8Path {
        &self.hotels
    }
}

impl PoiSource for CsvPoiSource {
    type Error = LoadPoisError;

    fn load_catalogue(&self) -> Result<PoiCatalogue, Self::Error> {
        Ok(PoiCatalogue {
            gas: load_pois(&self.gas_stations)?,
            rest: load_pois(&self.rest_stops)?,
            lodging: load_pois(&self.hotels)?,
        })
    }
}
