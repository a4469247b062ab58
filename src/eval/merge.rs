//! Right join of predictions onto the ground truth

use crate::adapter::{ID_COLUMN, PREDICTION_COLUMN};
use crate::error::{Error, Result};
use crate::frame::{Frame, Value};
use std::collections::HashMap;

/// Binary ground-truth label column
pub const OUTCOME_COLUMN: &str = "new_child";

/// One merged row: the subject's predicted label, if any, and true outcome
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub prediction: Option<Value>,
    pub outcome: Value,
}

/// Join key over the identifier column. Identifiers are usually numeric but
/// the join tolerates text ids as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum JoinKey {
    Num(i64),
    Text(String),
}

fn join_key(value: &Value) -> Option<JoinKey> {
    if let Some(n) = value.binary_label() {
        return Some(JoinKey::Num(n));
    }
    match value {
        Value::Str(s) => Some(JoinKey::Text(s.trim().to_string())),
        _ => None,
    }
}

fn require_column(frame: &Frame, column: &str) -> Result<usize> {
    frame.column_index(column).ok_or_else(|| Error::MissingColumn {
        column: column.to_string(),
    })
}

/// Join predictions onto the ground truth by subject identifier.
///
/// Every ground-truth row is retained. Predictions without a matching truth
/// row are dropped; truth rows without a matching prediction carry `None`,
/// which downstream never counts as a match. This join direction is
/// deliberate and mirrors the competition's scoring contract.
pub fn right_join(predictions: &Frame, truth: &Frame) -> Result<Vec<MergedRow>> {
    let pred_id = require_column(predictions, ID_COLUMN)?;
    let pred_label = require_column(predictions, PREDICTION_COLUMN)?;
    let truth_id = require_column(truth, ID_COLUMN)?;
    let truth_outcome = require_column(truth, OUTCOME_COLUMN)?;

    let mut by_id: HashMap<JoinKey, &Value> = HashMap::new();
    for row in predictions.rows() {
        if let Some(key) = join_key(&row[pred_id]) {
            by_id.entry(key).or_insert(&row[pred_label]);
        }
    }

    let merged = truth
        .rows()
        .iter()
        .map(|row| {
            let prediction = join_key(&row[truth_id])
                .and_then(|key| by_id.get(&key))
                .map(|v| (*v).clone());
            MergedRow {
                prediction,
                outcome: row[truth_outcome].clone(),
            }
        })
        .collect();

    Ok(merged)
}
