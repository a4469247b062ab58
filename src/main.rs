//! Prever CLI
//!
//! Entry point for the evaluation harness.
//!
//! # Usage
//!
//! ```bash
//! # Generate predictions
//! prever predict data.csv background.csv --output predictions.csv
//!
//! # Score predictions against the ground truth
//! prever score predictions.csv ground_truth.csv --output metrics.csv
//! ```

use clap::Parser;
use prever::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
