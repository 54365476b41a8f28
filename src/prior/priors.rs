//! Rank-based prior weights

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::mutual_info::{codes, label_codes, mutual_information, N_BINS};
use crate::data::Frame;
use crate::{Error, Result};

/// Per-feature sampling weights, each in `[floor, 1]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    weights: BTreeMap<String, f64>,
    floor: f64,
}

impl Priors {
    /// Equal weight 1.0 for every feature
    pub fn uniform<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            weights: features.into_iter().map(|f| (f.into(), 1.0)).collect(),
            floor: 0.0,
        }
    }

    /// Weight of `feature`, if it was scored
    pub fn get(&self, feature: &str) -> Option<f64> {
        self.weights.get(feature).copied()
    }

    /// Weight of `feature`, 1.0 for features never scored
    pub fn weight(&self, feature: &str) -> f64 {
        self.get(feature).unwrap_or(1.0)
    }

    /// Lower bound applied to every weight
    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Features and weights in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Features sorted by weight descending, ties by name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Score every non-target column of `frame` and turn the ranking into weights.
///
/// Rank `r` (0-based) of `n` features gets `max(1 − r/n, floor)`.
pub fn estimate_priors(frame: &Frame, target: &str, floor: f64) -> Result<Priors> {
    if !(0.0..=1.0).contains(&floor) {
        return Err(Error::Config(format!(
            "prior floor must be in [0, 1], got {floor}"
        )));
    }
    let target_codes = label_codes(&frame.require(target)?.labels());

    let mut scores: Vec<(String, f64)> = frame
        .iter()
        .filter(|(name, _)| *name != target)
        .map(|(name, column)| {
            let mi = mutual_information(&codes(column, N_BINS), &target_codes);
            tracing::debug!(feature = name, mutual_information = mi, "scored feature");
            (name.to_string(), mi)
        })
        .collect();
    scores.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let n = scores.len() as f64;
    let weights: BTreeMap<String, f64> = scores
        .into_iter()
        .enumerate()
        .map(|(rank, (name, _))| (name, (1.0 - rank as f64 / n).max(floor)))
        .collect();

    tracing::info!(features = weights.len(), floor, "estimated priors");
    Ok(Priors { weights, floor })
}
