//! Predict command implementation

use crate::adapter::{run_adapter, ZeroBaseline};
use crate::cli::args::PredictArgs;
use crate::cli::logging::{log, LogLevel};
use crate::io::{frame_to_csv, read_csv};

pub fn run_predict(args: PredictArgs, level: LogLevel) -> Result<(), String> {
    let data = read_csv(&args.data).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded data: {} rows x {} columns from {}",
            data.n_rows(),
            data.n_cols(),
            args.data.display()
        ),
    );

    let background = read_csv(&args.background_data).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded background data: {} rows x {} columns from {}",
            background.n_rows(),
            background.n_cols(),
            args.background_data.display()
        ),
    );

    // Swap in real modeling code here; the harness only sees the contract.
    let predictor = ZeroBaseline;
    let predictions = run_adapter(&predictor, &data, &background).map_err(|e| e.to_string())?;

    frame_to_csv(&predictions, args.output.as_deref()).map_err(|e| e.to_string())?;

    if let Some(path) = &args.output {
        log(
            level,
            LogLevel::Normal,
            &format!("Wrote {} predictions to {}", predictions.n_rows(), path.display()),
        );
    }
    Ok(())
}
