//! Scoring flow: merge predictions onto ground truth and compute metrics
//!
//! - `merge`: right join on the subject identifier, anchored on the
//!   ground-truth side
//! - `metrics`: accuracy, precision, recall, and F1 for the positive class,
//!   with independent zero-division guards

pub mod merge;
pub mod metrics;

pub use merge::{right_join, MergedRow, OUTCOME_COLUMN};
pub use metrics::{score_predictions, ConfusionCounts, Metrics};
