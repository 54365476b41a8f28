//! Regression metrics

use ndarray::ArrayView1;

/// Mean squared error
pub fn mse(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    (&y_true - &y_pred).mapv(|d| d * d).mean().unwrap_or(0.0)
}

/// Root mean squared error
pub fn rmse(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    mse(y_true, y_pred).sqrt()
}

/// Mean absolute error
pub fn mae(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    (&y_true - &y_pred).mapv(f64::abs).mean().unwrap_or(0.0)
}

/// Coefficient of determination
///
/// A constant target gives 1.0 for a perfect fit and 0.0 otherwise.
pub fn r2(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> f64 {
    let Some(mean) = y_true.mean() else {
        return 0.0;
    };
    let ss_res: f64 = (&y_true - &y_pred).mapv(|d| d * d).sum();
    let ss_tot: f64 = y_true.mapv(|y| (y - mean) * (y - mean)).sum();
    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// Pearson correlation; 0.0 when either side has no variance
pub fn pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
    let (Some(mx), Some(my)) = (x.mean(), y.mean()) else {
        return 0.0;
    };
    let dx = x.mapv(|v| v - mx);
    let dy = y.mapv(|v| v - my);
    let denom = (dx.dot(&dx) * dy.dot(&dy)).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        0.0
    } else {
        dx.dot(&dy) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_mse_rmse_mae() {
        let y = array![1.0, 2.0, 3.0];
        let p = array![1.0, 2.0, 5.0];
        assert_relative_eq!(mse(y.view(), p.view()), 4.0 / 3.0);
        assert_relative_eq!(rmse(y.view(), p.view()), (4.0f64 / 3.0).sqrt());
        assert_relative_eq!(mae(y.view(), p.view()), 2.0 / 3.0);
    }

    #[test]
    fn test_r2_perfect_and_mean() {
        let y = array![1.0, 2.0, 3.0];
        assert_relative_eq!(r2(y.view(), y.view()), 1.0);
        let mean = array![2.0, 2.0, 2.0];
        assert_relative_eq!(r2(y.view(), mean.view()), 0.0);
    }

    #[test]
    fn test_r2_constant_target() {
        let y = array![2.0, 2.0];
        assert_relative_eq!(r2(y.view(), y.view()), 1.0);
        assert_relative_eq!(r2(y.view(), array![1.0, 3.0].view()), 0.0);
    }

    #[test]
    fn test_pearson() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(pearson(x.view(), x.mapv(|v| 2.0 * v + 1.0).view()), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pearson(x.view(), x.mapv(|v| -v).view()), -1.0, epsilon = 1e-12);
        assert_eq!(pearson(x.view(), array![1.0, 1.0, 1.0, 1.0].view()), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        let e = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(mse(e.view(), e.view()), 0.0);
        assert_eq!(r2(e.view(), e.view()), 0.0);
    }
}
