//! Recommend command implementation for the Waystop CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use geo::Coord;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waystop_core::{
    MergeOrder, PoiSource, Recommendation, RecommendConfig, RecommendationSet, TripState,
    VehicleProfile, is_night_hour, parse_night_answer, recommend_for_trip, recommendation_sets,
};
use waystop_data::{CsvPoiSource, GAS_STATIONS_FILE, HOTELS_FILE, REST_STOPS_FILE};

use crate::{
    ARG_DATA_DIR, ARG_FORMAT, ARG_FUEL_EFFICIENCY, ARG_FUEL_LEVEL, ARG_FUEL_RANGE,
    ARG_GAS_STATIONS, ARG_HOTELS, ARG_HOUR, ARG_HOURS_DRIVEN, ARG_LATITUDE, ARG_LIMIT,
    ARG_LONGITUDE, ARG_MERGE_ORDER, ARG_NIGHT, ARG_REST_STOPS, ARG_REST_THRESHOLD,
    ARG_SAFETY_BUFFER, ARG_TANK_CAPACITY, CliError, ENV_FUEL_RANGE, ENV_HOURS_DRIVEN,
    ENV_LATITUDE, ENV_LONGITUDE, ENV_NIGHT,
};

/// Header printed above text output.
pub(crate) const RECOMMENDATIONS_HEADER: &str = "- Recommendations -";

/// How recommendations are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat {
    /// A header followed by one line per stop.
    #[default]
    Text,
    /// A pretty-printed JSON object with the merged stops and the
    /// annotated groups they came from.
    Json,
}

/// JSON document written by `--format json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct RecommendReport {
    /// Merged stops, in the requested order.
    pub(crate) recommendations: Vec<Recommendation>,
    /// Per-category groups with the reason each was raised.
    pub(crate) sets: Vec<RecommendationSet>,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Recommend gas stations, rest stops and hotels within the \
                 remaining fuel range. Values can come from CLI flags, \
                 configuration files, or environment variables. The range \
                 is taken from --fuel-range, or derived from the vehicle \
                 flags when it is absent. Rest stops are offered once the \
                 rest threshold is reached; hotels only at night.",
    about = "Recommend stops near the current position"
)]
#[ortho_config(prefix = "WAYSTOP")]
pub(crate) struct RecommendArgs {
    /// Current latitude in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Current longitude in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Remaining fuel range in miles; derived from the vehicle when unset.
    #[arg(long = ARG_FUEL_RANGE, value_name = "miles")]
    #[serde(default)]
    pub(crate) fuel_range: Option<f64>,
    /// Fraction of the tank still filled, between 0 and 1.
    #[arg(long = ARG_FUEL_LEVEL, value_name = "fraction")]
    #[serde(default)]
    pub(crate) fuel_level: Option<f64>,
    /// Tank capacity in gallons.
    #[arg(long = ARG_TANK_CAPACITY, value_name = "gallons")]
    #[serde(default)]
    pub(crate) tank_capacity: Option<f64>,
    /// Fuel efficiency in miles per gallon.
    #[arg(long = ARG_FUEL_EFFICIENCY, value_name = "mpg")]
    #[serde(default)]
    pub(crate) fuel_efficiency: Option<f64>,
    /// Fuel level at or below which gas stops are flagged as urgent.
    #[arg(long = ARG_SAFETY_BUFFER, value_name = "fraction")]
    #[serde(default)]
    pub(crate) safety_buffer: Option<f64>,
    /// Hours driven since the last rest.
    #[arg(long = ARG_HOURS_DRIVEN, value_name = "hours")]
    #[serde(default)]
    pub(crate) hours_driven: Option<f64>,
    /// Answer to "is it night?"; anything other than `no` counts as yes.
    #[arg(long = ARG_NIGHT, value_name = "answer")]
    #[serde(default)]
    pub(crate) night: Option<String>,
    /// Local hour used to decide whether it is night when `--night` is unset.
    #[arg(
        long = ARG_HOUR,
        value_name = "0-23",
        value_parser = clap::value_parser!(u8).range(0..=23)
    )]
    #[serde(default)]
    pub(crate) hour: Option<u8>,
    /// Directory containing the default list file names.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the gas station list (`gas_stations.csv`).
    #[arg(long = ARG_GAS_STATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) gas_stations: Option<Utf8PathBuf>,
    /// Override the path to the rest stop list (`rest_stops.csv`).
    #[arg(long = ARG_REST_STOPS, value_name = "path")]
    #[serde(default)]
    pub(crate) rest_stops: Option<Utf8PathBuf>,
    /// Override the path to the hotel list (`hotels.csv`).
    #[arg(long = ARG_HOTELS, value_name = "path")]
    #[serde(default)]
    pub(crate) hotels: Option<Utf8PathBuf>,
    /// Hours of driving before rest stops are offered.
    #[arg(long = ARG_REST_THRESHOLD, value_name = "hours")]
    #[serde(default)]
    pub(crate) rest_threshold: Option<f64>,
    /// Maximum number of stops per category and in the merged list.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// How categories are combined: `by-distance` or `grouped`.
    #[arg(long = ARG_MERGE_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) merge_order: Option<MergeOrder>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_request(self) -> Result<RecommendRequest, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendRequest::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendRequest {
    /// Validated traveller state.
    pub(crate) trip: TripState,
    /// Vehicle built from the fuel flags, when any was given.
    pub(crate) vehicle: Option<VehicleProfile>,
    /// Data directory when one was given explicitly.
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Resolved list paths.
    pub(crate) sources: CsvPoiSource,
    /// Thresholds, caps and merge order.
    pub(crate) config: RecommendConfig,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl RecommendRequest {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(dir) = &self.data_dir {
            Self::require_directory(dir)?;
        }
        Self::require_existing(self.sources.gas_stations(), ARG_GAS_STATIONS)?;
        Self::require_existing(self.sources.rest_stops(), ARG_REST_STOPS)?;
        Self::require_existing(self.sources.hotels(), ARG_HOTELS)?;
        Ok(())
    }

    fn require_directory(path: &Utf8Path) -> Result<(), CliError> {
        match waystop_fs::dir_is_dir(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::DataDirNotDirectory {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_DATA_DIR,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_DATA_DIR,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match waystop_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendRequest {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LATITUDE,
        })?;
        let lon = args.lon.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LONGITUDE,
        })?;
        let vehicle = vehicle_profile(&args)?;
        let fuel_range = match (args.fuel_range, vehicle.as_ref()) {
            (Some(miles), _) => miles,
            (None, Some(profile)) => profile.remaining_range_miles(),
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_FUEL_RANGE,
                    env: ENV_FUEL_RANGE,
                });
            }
        };
        let hours_driven = args.hours_driven.ok_or(CliError::MissingArgument {
            field: ARG_HOURS_DRIVEN,
            env: ENV_HOURS_DRIVEN,
        })?;
        let is_night = resolve_night(args.night.as_deref(), args.hour)?;
        let trip = TripState::new(Coord { x: lon, y: lat }, fuel_range, hours_driven, is_night)?;

        let root = args
            .data_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let gas_stations = args
            .gas_stations
            .unwrap_or_else(|| root.join(GAS_STATIONS_FILE));
        let rest_stops = args
            .rest_stops
            .unwrap_or_else(|| root.join(REST_STOPS_FILE));
        let hotels = args.hotels.unwrap_or_else(|| root.join(HOTELS_FILE));

        let mut config = RecommendConfig::default();
        if let Some(hours) = args.rest_threshold {
            if !hours.is_finite() || hours < 0.0 {
                return Err(CliError::InvalidRestThreshold(hours));
            }
            config = config.with_rest_threshold_hours(hours);
        }
        if let Some(limit) = args.limit {
            config = config.with_limit(limit);
        }
        if let Some(order) = args.merge_order {
            config = config.with_merge_order(order);
        }

        Ok(Self {
            trip,
            vehicle,
            data_dir: args.data_dir,
            sources: CsvPoiSource::new(gas_stations, rest_stops, hotels),
            config,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Build a vehicle when any fuel flag is set; unset values take the defaults.
fn vehicle_profile(args: &RecommendArgs) -> Result<Option<VehicleProfile>, CliError> {
    if args.fuel_level.is_none()
        && args.tank_capacity.is_none()
        && args.fuel_efficiency.is_none()
        && args.safety_buffer.is_none()
    {
        return Ok(None);
    }
    let defaults = VehicleProfile::default();
    let profile = VehicleProfile::new(
        args.tank_capacity.unwrap_or_else(|| defaults.tank_capacity_gallons()),
        args.fuel_efficiency.unwrap_or_else(|| defaults.fuel_efficiency_mpg()),
        args.fuel_level.unwrap_or_else(|| defaults.current_fuel_level()),
        args.safety_buffer.unwrap_or_else(|| defaults.safety_buffer_fraction()),
    )?;
    Ok(Some(profile))
}

/// Decide whether it is night: an explicit answer wins over the hour.
pub(crate) fn resolve_night(answer: Option<&str>, hour: Option<u8>) -> Result<bool, CliError> {
    match (answer, hour) {
        (Some(text), _) => Ok(parse_night_answer(text)),
        (None, Some(hour)) => Ok(is_night_hour(hour)),
        (None, None) => Err(CliError::MissingArgument {
            field: ARG_NIGHT,
            env: ENV_NIGHT,
        }),
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = resolve_request(args)?;
    let report = execute_recommend(&request)?;
    write_recommendations(writer, &report, request.format)
}

fn resolve_request(args: RecommendArgs) -> Result<RecommendRequest, CliError> {
    let request = args.into_request()?;
    request.validate_sources()?;
    Ok(request)
}

fn execute_recommend(request: &RecommendRequest) -> Result<RecommendReport, CliError> {
    let catalogue = request.sources.load_catalogue()?;
    info!(
        "Searching {} points of interest within {} miles",
        catalogue.len(),
        request.trip.fuel_range_miles()
    );
    let recommendations = recommend_for_trip(&request.trip, &catalogue, &request.config)
        .merge(request.config.merge_order, request.config.merged_limit);
    debug!(
        "Merged {} recommendations by {}",
        recommendations.len(),
        request.config.merge_order
    );
    // Text output has no room for the groups.
    let sets = match request.format {
        OutputFormat::Text => Vec::new(),
        OutputFormat::Json => recommendation_sets(
            &request.trip,
            &catalogue,
            &request.config,
            request.vehicle.as_ref(),
        ),
    };
    Ok(RecommendReport {
        recommendations,
        sets,
    })
}

pub(crate) fn write_recommendations(
    writer: &mut dyn Write,
    report: &RecommendReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{RECOMMENDATIONS_HEADER}").map_err(CliError::WriteOutput)?;
            for recommendation in &report.recommendations {
                writeln!(writer, "{recommendation}").map_err(CliError::WriteOutput)?;
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(report)
                .map_err(CliError::SerialiseOutput)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn request_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendRequest, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendRequest::try_from(merged)
}
