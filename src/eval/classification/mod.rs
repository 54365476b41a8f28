//! Binary classification metrics
//!
//! Labels are `0.0`/`1.0`; predictions are probabilities of the positive class.

mod confusion;
mod roc;


pub use confusion::ConfusionMatrix;
pub use roc::{roc_auc, roc_curve, RocPoint};

use ndarray::ArrayView1;

/// Default decision threshold on predicted probabilities
pub const THRESHOLD: f64 = 0.5;

/// Fraction of rows where `p > threshold` agrees with the label
pub fn accuracy(y_true: ArrayView1<'_, f64>, y_prob: ArrayView1<'_, f64>, threshold: f64) -> f64 {
    ConfusionMatrix::from_probabilities(y_true, y_prob, threshold).accuracy()
}
