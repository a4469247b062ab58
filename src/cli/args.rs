//! CLI argument parsing
//!
//! ```bash
//! prever predict data.csv background.csv --output predictions.csv
//! prever score predictions.csv ground_truth.csv --output metrics.csv
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prever: evaluation harness for the fertility prediction challenge
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "prever")]
#[command(version)]
#[command(about = "Run the predict and score flows of the holdout evaluation")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate predictions from the data and background data CSVs
    Predict(PredictArgs),

    /// Score predictions against the ground truth
    Score(ScoreArgs),
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Path to the data CSV file
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Path to the background data CSV file
    #[arg(value_name = "BACKGROUND_DATA")]
    pub background_data: PathBuf,

    /// Path to the prediction output CSV file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Path to the predictions CSV file
    #[arg(value_name = "PREDICTIONS")]
    pub predictions: PathBuf,

    /// Path to the ground truth CSV file
    #[arg(value_name = "GROUND_TRUTH")]
    pub ground_truth: PathBuf,

    /// Path to the metrics output CSV file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict_command() {
        let cli = parse_args(["prever", "predict", "data.csv", "background.csv"]).unwrap();
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.data, PathBuf::from("data.csv"));
                assert_eq!(args.background_data, PathBuf::from("background.csv"));
                assert_eq!(args.output, None);
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_parse_predict_with_output() {
        let cli = parse_args([
            "prever",
            "predict",
            "data.csv",
            "background.csv",
            "--output",
            "predictions.csv",
        ])
        .unwrap();
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.output, Some(PathBuf::from("predictions.csv")));
            }
            _ => panic!("Expected Predict command"),
        }
    }

    #[test]
    fn test_parse_score_command() {
        let cli = parse_args(["prever", "score", "predictions.csv", "truth.csv"]).unwrap();
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.predictions, PathBuf::from("predictions.csv"));
                assert_eq!(args.ground_truth, PathBuf::from("truth.csv"));
                assert_eq!(args.output, None);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_parse_score_with_output() {
        let cli = parse_args([
            "prever",
            "score",
            "predictions.csv",
            "truth.csv",
            "--output",
            "metrics.csv",
        ])
        .unwrap();
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.output, Some(PathBuf::from("metrics.csv")));
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let cli = parse_args(["prever", "-v", "predict", "data.csv", "bg.csv"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let cli = parse_args(["prever", "-q", "score", "p.csv", "t.csv"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_positional_arguments() {
        assert!(parse_args(["prever", "predict", "data.csv"]).is_err());
        assert!(parse_args(["prever", "score"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_args(["prever", "train", "config.yaml"]).is_err());
    }
}
