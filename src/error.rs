//! Crate-wide error types

use std::path::PathBuf;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Harness errors
///
/// I/O and schema failures are fatal and carry enough context to name the
/// offending file or column. Arithmetic edge cases in the metrics are not
/// errors; they are recovered locally (zero denominators default to 0).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error(
        "predictions must have exactly two columns: nomem_encr and prediction (got {found:?})"
    )]
    PredictionSchema { found: Vec<String> },

    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    #[error("failed to serialize csv output: {0}")]
    Output(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_expected_columns() {
        let err = Error::PredictionSchema {
            found: vec!["nomem_encr".to_string(), "score".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("nomem_encr and prediction"));
        assert!(msg.contains("score"));
    }

    #[test]
    fn test_read_error_includes_path() {
        let err = Error::Read {
            path: PathBuf::from("/no/such/data.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/no/such/data.csv"));
    }

    #[test]
    fn test_missing_column_names_column() {
        let err = Error::MissingColumn {
            column: "new_child".to_string(),
        };
        assert!(err.to_string().contains("new_child"));
    }
}
