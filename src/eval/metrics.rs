//! Binary classification metrics for the scoring flow

use super::merge::{right_join, MergedRow};
use crate::error::Result;
use crate::frame::{Frame, Value};
use serde::Serialize;

/// Confusion counts for the positive (new child) class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// tp / (tp + fp), 0 when nothing was predicted positive
    pub fn precision(&self) -> f64 {
        let denom = self.true_positives + self.false_positives;
        if denom == 0 {
            0.0
        } else {
            self.true_positives as f64 / denom as f64
        }
    }

    /// tp / (tp + fn), 0 when no positives exist in the truth
    pub fn recall(&self) -> f64 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            0.0
        } else {
            self.true_positives as f64 / denom as f64
        }
    }

    /// Harmonic mean of precision and recall, 0 when both are 0
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

/// One-row metrics record written by the score flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

fn tally(merged: &[MergedRow]) -> (usize, ConfusionCounts) {
    let mut correct = 0;
    let mut counts = ConfusionCounts::default();
    for row in merged {
        let pred = row.prediction.as_ref().and_then(Value::binary_label);
        let outcome = row.outcome.binary_label();
        // A missing side never matches, so dropped or absent predictions
        // count as incorrect and contribute to no confusion cell.
        if let (Some(p), Some(t)) = (pred, outcome) {
            if p == t {
                correct += 1;
            }
            match (p, t) {
                (1, 1) => counts.true_positives += 1,
                (1, 0) => counts.false_positives += 1,
                (0, 1) => counts.false_negatives += 1,
                _ => {}
            }
        }
    }
    (correct, counts)
}

/// Score predictions against the ground truth.
///
/// The merge is a right join anchored on the ground-truth side: every truth
/// row is counted in the accuracy denominator whether or not a prediction
/// exists for it.
pub fn score_predictions(predictions: &Frame, truth: &Frame) -> Result<Metrics> {
    let merged = right_join(predictions, truth)?;
    let (correct, counts) = tally(&merged);
    let accuracy = if merged.is_empty() {
        0.0
    } else {
        correct as f64 / merged.len() as f64
    };
    Ok(Metrics {
        accuracy,
        precision: counts.precision(),
        recall: counts.recall(),
        f1_score: counts.f1(),
    })
}
