//! Discrete mutual information

use std::collections::BTreeMap;

use crate::data::Column;

/// Maximum number of bins for numeric features
pub const N_BINS: usize = 10;

/// Assign each value to one of up to `n_bins` equal-frequency bins.
///
/// Equal values always share a bin: a value's bin is determined by the
/// position of its first occurrence in sorted order.
pub fn equal_frequency_bins(values: &[f64], n_bins: usize) -> Vec<usize> {
    let n = values.len();
    if n == 0 || n_bins == 0 {
        return vec![0; n];
    }
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    values
        .iter()
        .map(|v| {
            let first = sorted.partition_point(|s| s.total_cmp(v).is_lt());
            (first * n_bins / n).min(n_bins - 1)
        })
        .collect()
}

/// Integer codes for a column: bins for numeric, category index for labels
pub(crate) fn codes(column: &Column, n_bins: usize) -> Vec<usize> {
    match column {
        Column::Numeric(values) => {
            let values: Vec<f64> = values.iter().copied().collect();
            equal_frequency_bins(&values, n_bins)
        }
        Column::Categorical(labels) => label_codes(labels),
    }
}

/// Dense codes for labels in sorted order
pub(crate) fn label_codes(labels: &[String]) -> Vec<usize> {
    let levels: BTreeMap<&str, usize> = labels
        .iter()
        .map(String::as_str)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, l)| (l, i))
        .collect();
    labels.iter().map(|l| levels[l.as_str()]).collect()
}

/// Mutual information (nats) between two equally long code sequences
pub fn mutual_information(x: &[usize], y: &[usize]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mut joint: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    let mut px: BTreeMap<usize, usize> = BTreeMap::new();
    let mut py: BTreeMap<usize, usize> = BTreeMap::new();
    for (&a, &b) in x.iter().zip(y) {
        *joint.entry((a, b)).or_default() += 1;
        *px.entry(a).or_default() += 1;
        *py.entry(b).or_default() += 1;
    }

    let n = n as f64;
    let mi: f64 = joint
        .iter()
        .map(|(&(a, b), &count)| {
            let pxy = count as f64 / n;
            let pa = px[&a] as f64 / n;
            let pb = py[&b] as f64 / n;
            pxy * (pxy / (pa * pb)).ln()
        })
        .sum();
    mi.max(0.0)
}
