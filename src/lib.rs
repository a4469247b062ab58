//! prever: evaluation harness for the fertility prediction challenge
//!
//! Two independent one-shot flows over flat CSV files:
//!
//! - **predict**: data + background data → external [`adapter::Predictor`]
//!   → schema-validated two-column predictions CSV (`nomem_encr`,
//!   `prediction`)
//! - **score**: predictions + ground truth → right join on `nomem_encr`
//!   anchored on the truth side → one-row metrics CSV (accuracy, precision,
//!   recall, f1_score)
//!
//! The prediction method itself is deliberately out of scope: it is a
//! pluggable collaborator behind the [`adapter::Predictor`] trait.

pub mod adapter;
pub mod cli;
pub mod error;
pub mod eval;
pub mod frame;
pub mod io;

pub use error::{Error, Result};
pub use eval::{score_predictions, Metrics};
pub use frame::{Frame, Value};
