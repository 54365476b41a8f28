//! Pool ranking and diverse selection

use std::collections::{BTreeMap, BTreeSet};

use crate::eval::Criterion;
use crate::model::Model;

/// Sort best-first by `criterion` (ties: lower complexity, then signature),
/// drop duplicate structures and non-finite scores, keep at most `limit`
pub fn rank_models(models: Vec<Model>, criterion: Criterion, limit: usize) -> Vec<Model> {
    let mut keyed: Vec<(f64, usize, String, Model)> = models
        .into_iter()
        .map(|m| (m.score(criterion), m.complexity(), m.signature(), m))
        .filter(|(score, ..)| score.is_finite())
        .collect();
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut seen = BTreeSet::new();
    keyed
        .into_iter()
        .filter(|(_, _, signature, _)| seen.insert(signature.clone()))
        .take(limit)
        .map(|(.., model)| model)
        .collect()
}

/// Models allowed per distinct feature set
const PER_FEATURE_SET: usize = 2;

/// Up to `max_models` ranked models with distinct signatures and at most two
/// per feature set
pub fn select_diverse(ranked: &[Model], max_models: usize) -> Vec<Model> {
    let mut per_set: BTreeMap<Vec<String>, usize> = BTreeMap::new();
    let mut signatures = BTreeSet::new();
    let mut selected = Vec::new();

    for model in ranked {
        if selected.len() >= max_models {
            break;
        }
        let mut features: Vec<String> = model.features().iter().map(|f| f.to_string()).collect();
        features.sort();
        let count = per_set.entry(features).or_default();
        if *count >= PER_FEATURE_SET || !signatures.insert(model.signature()) {
            continue;
        }
        *count += 1;
        selected.push(model.clone());
    }
    selected
}
