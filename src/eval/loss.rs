//! Training losses

use ndarray::ArrayView1;

/// Probabilities are clipped to `[EPS, 1 - EPS]` before taking logs
pub const EPS: f64 = 1e-7;

/// Mean binary cross-entropy of positive-class probabilities
pub fn binary_cross_entropy(y_true: ArrayView1<'_, f64>, y_prob: ArrayView1<'_, f64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let total: f64 = y_true
        .iter()
        .zip(y_prob.iter())
        .map(|(&y, &p)| {
            let p = p.clamp(EPS, 1.0 - EPS);
            -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        })
        .sum();
    total / y_true.len() as f64
}

/// Mean squared error used as the regression training loss
pub fn squared_error(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    super::regression::mse(y_true, y_pred)
}
