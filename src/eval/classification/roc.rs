//! ROC curve and area under it

use ndarray::ArrayView1;
use std::cmp::Ordering;

/// One point of a ROC curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocPoint {
    /// False positive rate
    pub fpr: f64,
    /// True positive rate
    pub tpr: f64,
    /// Score threshold producing this point (`p >= threshold` is positive)
    pub threshold: f64,
}

/// Area under the ROC curve via the rank-sum statistic.
///
/// Tied scores receive their average rank. Returns 0.5 when only one class
/// is present, since the curve is undefined.
pub fn roc_auc(y_true: ArrayView1<'_, f64>, y_score: ArrayView1<'_, f64>) -> f64 {
    let n = y_true.len();
    let n_pos = y_true.iter().filter(|&&y| y > 0.5).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        tracing::warn!(n_pos, n_neg, "AUC undefined for a single class, reporting 0.5");
        return 0.5;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        y_score[a]
            .partial_cmp(&y_score[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && y_score[order[j + 1]] == y_score[order[i]] {
            j += 1;
        }
        // 1-based ranks i+1..=j+1 share their mean
        let avg = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }

    let pos_rank_sum: f64 = (0..n).filter(|&k| y_true[k] > 0.5).map(|k| ranks[k]).sum();
    let n_pos = n_pos as f64;
    (pos_rank_sum - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg as f64)
}

/// ROC curve points from the strictest threshold to the loosest.
///
/// Starts at `(0, 0)` with an infinite threshold and ends at `(1, 1)`.
pub fn roc_curve(y_true: ArrayView1<'_, f64>, y_score: ArrayView1<'_, f64>) -> Vec<RocPoint> {
    let n_pos = y_true.iter().filter(|&&y| y > 0.5).count() as f64;
    let n_neg = y_true.len() as f64 - n_pos;

    let mut order: Vec<usize> = (0..y_true.len()).collect();
    order.sort_by(|&a, &b| {
        y_score[b]
            .partial_cmp(&y_score[a])
            .unwrap_or(Ordering::Equal)
    });

    let rate = |count: f64, total: f64| if total > 0.0 { count / total } else { 0.0 };

    let mut points = vec![RocPoint {
        fpr: 0.0,
        tpr: 0.0,
        threshold: f64::INFINITY,
    }];
    let (mut tp, mut fp) = (0.0, 0.0);
    let mut k = 0;
    while k < order.len() {
        let threshold = y_score[order[k]];
        while k < order.len() && y_score[order[k]] == threshold {
            if y_true[order[k]] > 0.5 {
                tp += 1.0;
            } else {
                fp += 1.0;
            }
            k += 1;
        }
        points.push(RocPoint {
            fpr: rate(fp, n_neg),
            tpr: rate(tp, n_pos),
            threshold,
        });
    }
    points
}
