//! Score command implementation

use crate::cli::args::ScoreArgs;
use crate::cli::logging::{log, LogLevel};
use crate::eval::score_predictions;
use crate::io::{read_csv, record_to_csv};

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<(), String> {
    let predictions = read_csv(&args.predictions).map_err(|e| e.to_string())?;
    let truth = read_csv(&args.ground_truth).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Scoring {} predictions against {} ground truth rows",
            predictions.n_rows(),
            truth.n_rows()
        ),
    );

    let metrics = score_predictions(&predictions, &truth).map_err(|e| e.to_string())?;
    record_to_csv(&metrics, args.output.as_deref()).map_err(|e| e.to_string())?;

    if let Some(path) = &args.output {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "accuracy={:.4} precision={:.4} recall={:.4} f1={:.4} -> {}",
                metrics.accuracy,
                metrics.precision,
                metrics.recall,
                metrics.f1_score,
                path.display()
            ),
        );
    }
    Ok(())
}
