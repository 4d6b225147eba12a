//! Command-line interface for the Pure Prediction spot engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod fs;
mod query;
mod render;

pub use error::CliError;

use commands::{run_best_with, run_detail_with, run_rank_with};
use query::{BestArgs, DetailArgs, RankArgs};

const ARG_CATALOG: &str = "catalog";
const ARG_SPOT_ID: &str = "spot-id";
const ARG_MODE: &str = "mode";
const ARG_RADIUS_KM: &str = "radius-km";
const ARG_LAT: &str = "lat";
const ARG_LON: &str = "lon";
const ARG_FORMAT: &str = "format";
const ENV_RANK_CATALOG: &str = "PURE_CMDS_RANK_CATALOG";
const ENV_BEST_CATALOG: &str = "PURE_CMDS_BEST_CATALOG";
const ENV_DETAIL_CATALOG: &str = "PURE_CMDS_DETAIL_CATALOG";
const ENV_DETAIL_SPOT_ID: &str = "PURE_CMDS_DETAIL_SPOT_ID";

/// Run the Pure Prediction CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments are invalid, the catalog cannot be
/// read, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Best(args) => run_best_with(args, writer),
        Command::Detail(args) => run_detail_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pure-prediction",
    about = "Rank land and boat spots by quality and proximity",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the spots of one mode, best first.
    Rank(RankArgs),
    /// Show the single best spot of one mode.
    Best(BestArgs),
    /// Explain one spot and suggest better nearby spots.
    Detail(DetailArgs),
}

#[cfg(test)]
mod tests;
