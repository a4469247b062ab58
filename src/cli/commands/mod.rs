//! CLI command implementations

mod predict;
mod score;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Predict(args) => predict::run_predict(args, level),
        Command::Score(args) => score::run_score(args, level),
    }
}
