//! Property tests for the scoring metrics
//!
//! Ensures the metrics satisfy their invariants for arbitrary binary label
//! assignments:
//! - All four metrics bounded to [0, 1], never NaN or infinite
//! - Zero-denominator guards hold
//! - Accuracy matches a naive recount
//! - Scoring is idempotent

use prever::adapter::{ID_COLUMN, PREDICTION_COLUMN};
use prever::eval::{score_predictions, OUTCOME_COLUMN};
use prever::{Frame, Value};
use proptest::collection::vec;
use proptest::prelude::*;

fn predictions_frame(labels: &[i64]) -> Frame {
    let mut frame = Frame::new(vec![ID_COLUMN.to_string(), PREDICTION_COLUMN.to_string()]);
    for (id, &label) in labels.iter().enumerate() {
        frame.push_row(vec![Value::Int(id as i64), Value::Int(label)]);
    }
    frame
}

fn truth_frame(labels: &[i64]) -> Frame {
    let mut frame = Frame::new(vec![ID_COLUMN.to_string(), OUTCOME_COLUMN.to_string()]);
    for (id, &label) in labels.iter().enumerate() {
        frame.push_row(vec![Value::Int(id as i64), Value::Int(label)]);
    }
    frame
}

/// Paired binary label vectors; predictions may be shorter than the truth to
/// exercise the unmatched-truth path of the right join.
fn label_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1usize..60).prop_flat_map(|n| {
        (vec(0i64..=1, 0..=n), vec(0i64..=1, n..=n))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_metrics_bounded((preds, truth) in label_pair()) {
        let metrics = score_predictions(&predictions_frame(&preds), &truth_frame(&truth))
            .expect("scoring should succeed");

        for (name, value) in [
            ("accuracy", metrics.accuracy),
            ("precision", metrics.precision),
            ("recall", metrics.recall),
            ("f1_score", metrics.f1_score),
        ] {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "{} {} not in [0, 1]", name, value
            );
            prop_assert!(
                !value.is_nan() && !value.is_infinite(),
                "{} {} is NaN or Inf", name, value
            );
        }
    }

    #[test]
    fn prop_scoring_idempotent((preds, truth) in label_pair()) {
        let preds = predictions_frame(&preds);
        let truth = truth_frame(&truth);
        let first = score_predictions(&preds, &truth).expect("scoring should succeed");
        let second = score_predictions(&preds, &truth).expect("scoring should succeed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_accuracy_matches_naive_recount(labels in vec(0i64..=1, 1..60)) {
        // Same length, fully matched ids: accuracy is the plain agreement rate
        let flipped: Vec<i64> = labels.iter().map(|&l| 1 - l).collect();
        let metrics = score_predictions(&predictions_frame(&labels), &truth_frame(&flipped))
            .expect("scoring should succeed");
        prop_assert!(metrics.accuracy.abs() < 1e-9, "flipping every label leaves no matches");

        let metrics = score_predictions(&predictions_frame(&labels), &truth_frame(&labels))
            .expect("scoring should succeed");
        prop_assert!((metrics.accuracy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_all_negative_predictions_zero_precision(truth in vec(0i64..=1, 1..60)) {
        let preds = vec![0i64; truth.len()];
        let metrics = score_predictions(&predictions_frame(&preds), &truth_frame(&truth))
            .expect("scoring should succeed");
        prop_assert_eq!(metrics.precision, 0.0);
        prop_assert_eq!(metrics.f1_score, 0.0);
    }

    #[test]
    fn prop_no_positive_truth_zero_recall(preds in vec(0i64..=1, 1..60)) {
        let truth = vec![0i64; preds.len()];
        let metrics = score_predictions(&predictions_frame(&preds), &truth_frame(&truth))
            .expect("scoring should succeed");
        prop_assert_eq!(metrics.recall, 0.0);
        prop_assert_eq!(metrics.f1_score, 0.0);
    }

    #[test]
    fn prop_unmatched_truth_rows_lower_accuracy(truth in vec(1i64..=1, 2..40)) {
        // Perfect predictions for the first half only; the rest of the truth
        // is unmatched and must count against accuracy.
        let half = truth.len() / 2;
        let metrics = score_predictions(&predictions_frame(&truth[..half]), &truth_frame(&truth))
            .expect("scoring should succeed");

        let expected = half as f64 / truth.len() as f64;
        prop_assert!((metrics.accuracy - expected).abs() < 1e-9);
        // Unmatched positives are not false negatives, so recall stays 1
        prop_assert!((metrics.recall - 1.0).abs() < 1e-9);
    }
}
