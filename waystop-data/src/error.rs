//! Errors raised while loading point-of-interest lists.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating a CSV point-of-interest list.
///
/// `origin` names the data being read: the file path for files, or the label
/// supplied to [`read_pois`](crate::read_pois).
#[derive(Debug, Error)]
pub enum LoadPoisError {
    /// The file could not be opened.
    #[error("failed to open point-of-interest file {path}: {source}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The header row or a record could not be read.
    #[error("failed to read CSV from {origin}: {source}")]
    Read {
        /// Data being read.
        origin: String,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A record is missing a column or holds a non-numeric coordinate.
    #[error("malformed record on line {line} of {origin}: {source}")]
    Parse {
        /// Data being read.
        origin: String,
        /// One-based line number of the record.
        line: u64,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A coordinate parsed but lies outside its valid range.
    #[error("{field} {value} on line {line} of {origin} is out of range")]
    InvalidCoordinate {
        /// Data being read.
        origin: String,
        /// One-based line number of the record.
        line: u64,
        /// Column holding the coordinate.
        field: &'static str,
        /// Parsed value.
        value: f64,
    },
}
