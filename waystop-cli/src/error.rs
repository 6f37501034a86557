//! Error types emitted by the Waystop CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waystop_core::{TripStateError, VehicleProfileError};
use waystop_data::LoadPoisError;

/// Errors emitted by the Waystop CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A point-of-interest list does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the list.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A point-of-interest path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the list.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A point-of-interest path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The data directory exists but is not a directory.
    #[error("data directory {path:?} is not a directory")]
    DataDirNotDirectory {
        /// Requested directory.
        path: Utf8PathBuf,
    },
    /// The trip values failed validation.
    #[error("invalid trip: {0}")]
    InvalidTrip(#[from] TripStateError),
    /// The vehicle values failed validation.
    #[error("invalid vehicle: {0}")]
    InvalidVehicle(#[from] VehicleProfileError),
    /// The rest threshold was negative or non-finite.
    #[error("rest threshold {0} must be a finite, non-negative number of hours")]
    InvalidRestThreshold(f64),
    /// Loading a point-of-interest list failed.
    #[error(transparent)]
    LoadPois(#[from] LoadPoisError),
    /// Serialising recommendations to JSON failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
