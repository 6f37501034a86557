//! Command-line interface for recommending roadside stops.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_LATITUDE: &str = "lat";
pub(crate) const ARG_LONGITUDE: &str = "lon";
pub(crate) const ARG_FUEL_RANGE: &str = "fuel-range";
pub(crate) const ARG_FUEL_LEVEL: &str = "fuel-level";
pub(crate) const ARG_TANK_CAPACITY: &str = "tank-capacity";
pub(crate) const ARG_FUEL_EFFICIENCY: &str = "fuel-efficiency";
pub(crate) const ARG_SAFETY_BUFFER: &str = "safety-buffer";
pub(crate) const ARG_HOURS_DRIVEN: &str = "hours-driven";
pub(crate) const ARG_NIGHT: &str = "night";
pub(crate) const ARG_HOUR: &str = "hour";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_GAS_STATIONS: &str = "gas-stations";
pub(crate) const ARG_REST_STOPS: &str = "rest-stops";
pub(crate) const ARG_HOTELS: &str = "hotels";
pub(crate) const ARG_REST_THRESHOLD: &str = "rest-threshold";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MERGE_ORDER: &str = "merge-order";
pub(crate) const ARG_FORMAT: &str = "format";

pub(crate) const ENV_LATITUDE: &str = "WAYSTOP_CMDS_RECOMMEND_LAT";
pub(crate) const ENV_LONGITUDE: &str = "WAYSTOP_CMDS_RECOMMEND_LON";
pub(crate) const ENV_FUEL_RANGE: &str = "WAYSTOP_CMDS_RECOMMEND_FUEL_RANGE";
pub(crate) const ENV_HOURS_DRIVEN: &str = "WAYSTOP_CMDS_RECOMMEND_HOURS_DRIVEN";
pub(crate) const ENV_NIGHT: &str = "WAYSTOP_CMDS_RECOMMEND_NIGHT";

/// Run the Waystop CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// resolved, point-of-interest lists cannot be loaded, or output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waystop",
    about = "Recommend gas stations, rest stops and hotels within fuel range",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Recommend stops near the current position.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
