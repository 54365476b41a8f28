//! Search configuration

use serde::{Deserialize, Serialize};

use crate::eval::Criterion;
use crate::infer::SemanticTypes;
use crate::model::{FitConfig, Kind};

/// Settings for one [`QLattice::auto_run`](super::QLattice::auto_run) call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoRunSpec {
    /// Target column
    pub output_name: String,
    /// Classification or regression
    pub kind: Kind,
    /// Semantic types: column → "c" (categorical) or "f" (numeric)
    pub stypes: SemanticTypes,
    /// Sampling/fitting rounds
    pub n_epochs: usize,
    /// Maximum inputs + interactions per model
    pub max_complexity: usize,
    /// Ranking criterion
    pub criterion: Criterion,
    /// Fresh graphs sampled per epoch
    pub sample_size: usize,
    /// Adam steps per fit
    pub fit_steps: usize,
    /// Adam learning rate
    pub learning_rate: f64,
    /// Models retained between epochs
    pub pool_size: usize,
    /// Models returned
    pub max_models: usize,
}

impl Default for AutoRunSpec {
    fn default() -> Self {
        Self {
            output_name: "phenotype_reg".to_string(),
            kind: Kind::Classification,
            stypes: SemanticTypes::new(),
            n_epochs: 20,
            max_complexity: 10,
            criterion: Criterion::Bic,
            sample_size: 30,
            fit_steps: 150,
            learning_rate: 0.05,
            pool_size: 40,
            max_models: 10,
        }
    }
}

impl AutoRunSpec {
    /// Defaults for the given target and kind
    pub fn new(output_name: impl Into<String>, kind: Kind) -> Self {
        Self {
            output_name: output_name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Set semantic types
    pub fn with_stypes(mut self, stypes: SemanticTypes) -> Self {
        self.stypes = stypes;
        self
    }

    /// Set the number of epochs
    pub fn with_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }

    /// Set the ranking criterion
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set the per-epoch sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the maximum complexity
    pub fn with_max_complexity(mut self, max_complexity: usize) -> Self {
        self.max_complexity = max_complexity;
        self
    }

    /// Set fitting steps and learning rate
    pub fn with_fit(mut self, fit_steps: usize, learning_rate: f64) -> Self {
        self.fit_steps = fit_steps;
        self.learning_rate = learning_rate;
        self
    }

    pub(crate) fn fit_config(&self) -> FitConfig {
        FitConfig {
            steps: self.fit_steps,
            learning_rate: self.learning_rate,
        }
    }
}
