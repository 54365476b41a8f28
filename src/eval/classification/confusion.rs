//! Confusion matrix for binary classification

use ndarray::ArrayView1;
use std::fmt;

/// Binary confusion matrix
///
/// Rows are true labels, columns predicted labels, negative class first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// Predicted positive, actually positive
    pub true_positives: usize,
    /// Predicted positive, actually negative
    pub false_positives: usize,
    /// Predicted negative, actually negative
    pub true_negatives: usize,
    /// Predicted negative, actually positive
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Create from 0/1 labels and 0/1 predictions
    pub fn from_predictions(y_pred: &[bool], y_true: &[bool]) -> Self {
        assert_eq!(
            y_pred.len(),
            y_true.len(),
            "Predictions and targets must have same length"
        );

        let mut cm = Self::default();
        for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
            match (truth, pred) {
                (true, true) => cm.true_positives += 1,
                (false, true) => cm.false_positives += 1,
                (false, false) => cm.true_negatives += 1,
                (true, false) => cm.false_negatives += 1,
            }
        }
        cm
    }

    /// Create from labels and positive-class probabilities
    pub fn from_probabilities(
        y_true: ArrayView1<'_, f64>,
        y_prob: ArrayView1<'_, f64>,
        threshold: f64,
    ) -> Self {
        let pred: Vec<bool> = y_prob.iter().map(|&p| p > threshold).collect();
        let truth: Vec<bool> = y_true.iter().map(|&y| y > 0.5).collect();
        Self::from_predictions(&pred, &truth)
    }

    /// Matrix as `[[tn, fp], [fn, tp]]`
    pub fn matrix(&self) -> [[usize; 2]; 2] {
        [
            [self.true_negatives, self.false_positives],
            [self.false_negatives, self.true_positives],
        ]
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / total as f64
    }

    /// Positive-class precision
    pub fn precision(&self) -> f64 {
        let predicted = self.true_positives + self.false_positives;
        if predicted == 0 {
            0.0
        } else {
            self.true_positives as f64 / predicted as f64
        }
    }

    /// Positive-class recall
    pub fn recall(&self) -> f64 {
        let actual = self.true_positives + self.false_negatives;
        if actual == 0 {
            0.0
        } else {
            self.true_positives as f64 / actual as f64
        }
    }

    /// Positive-class F1
    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        }
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "        Pred 0 Pred 1")?;
        writeln!(f, "True 0{:>7}{:>7}", self.true_negatives, self.false_positives)?;
        writeln!(f, "True 1{:>7}{:>7}", self.false_negatives, self.true_positives)
    }
}
