//! External prediction boundary
//!
//! The prediction method itself is not part of the harness. Any collaborator
//! satisfies the [`Predictor`] contract: data table × background table → a
//! two-column prediction table. The harness treats implementations as opaque
//! and only enforces the output schema.

use crate::error::{Error, Result};
use crate::frame::{Frame, Value};

/// Anonymized unique identifier column shared by all input tables
pub const ID_COLUMN: &str = "nomem_encr";
/// Binary label column produced by adapters
pub const PREDICTION_COLUMN: &str = "prediction";

/// Capability contract for user-supplied prediction methods.
///
/// Implementations may be rule-based, statistical, or learned; the harness
/// makes no assumption beyond the returned table shape.
pub trait Predictor {
    fn predict_outcomes(&self, data: &Frame, background: &Frame) -> Result<Frame>;
}

/// Stand-in adapter predicting the negative class for every subject.
///
/// This is the placeholder the CLI runs until real modeling code is plugged
/// in; it exists so the end-to-end flow is exercisable out of the box.
pub struct ZeroBaseline;

impl Predictor for ZeroBaseline {
    fn predict_outcomes(&self, data: &Frame, _background: &Frame) -> Result<Frame> {
        let id_idx = data.column_index(ID_COLUMN).ok_or_else(|| Error::MissingColumn {
            column: ID_COLUMN.to_string(),
        })?;

        let mut predictions = Frame::new(vec![
            ID_COLUMN.to_string(),
            PREDICTION_COLUMN.to_string(),
        ]);
        for row in data.rows() {
            predictions.push_row(vec![row[id_idx].clone(), Value::Int(0)]);
        }
        Ok(predictions)
    }
}

/// Check the adapter output schema: exactly two columns, named
/// `nomem_encr` and `prediction`, in either order.
pub fn validate_predictions(predictions: &Frame) -> Result<()> {
    let columns = predictions.columns();
    let valid = columns.len() == 2
        && columns.iter().any(|c| c == ID_COLUMN)
        && columns.iter().any(|c| c == PREDICTION_COLUMN);
    if !valid {
        return Err(Error::PredictionSchema {
            found: columns.to_vec(),
        });
    }
    Ok(())
}

/// Invoke an adapter and validate its output shape.
///
/// Validation happens here, before the caller can write anything, so a
/// malformed adapter never produces partial output.
pub fn run_adapter(
    predictor: &dyn Predictor,
    data: &Frame,
    background: &Frame,
) -> Result<Frame> {
    let predictions = predictor.predict_outcomes(data, background)?;
    validate_predictions(&predictions)?;
    Ok(predictions)
}
