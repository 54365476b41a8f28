//! Regressor settings

use serde::{Deserialize, Serialize};

use super::loss::LossKind;
use super::ops::{BinaryOp, UnaryOp};

/// Settings for [`Regressor`](super::Regressor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrConfig {
    /// Numeric column to predict
    pub target: String,
    /// Columns never used as features (the target is always excluded)
    pub exclude_columns: Vec<String>,
    pub binary_operators: Vec<BinaryOp>,
    pub unary_operators: Vec<UnaryOp>,
    /// Largest allowed complexity
    pub maxsize: usize,
    /// Largest allowed tree depth
    pub maxdepth: usize,
    /// Complexity charged for one constant
    pub complexity_of_constants: usize,
    pub populations: usize,
    pub population_size: usize,
    pub niterations: usize,
    pub tournament_size: usize,
    pub crossover_probability: f64,
    /// Fitness penalty per unit of complexity
    pub parsimony: f64,
    pub random_state: u64,
    pub loss: LossKind,
}

impl Default for SrConfig {
    fn default() -> Self {
        Self {
            target: "phenotype_reg".to_string(),
            exclude_columns: ["run", "phenotype", "phenotype_reg", "gender", "region"]
                .into_iter()
                .map(String::from)
                .collect(),
            binary_operators: BinaryOp::ALL.to_vec(),
            unary_operators: UnaryOp::ALL.to_vec(),
            maxsize: 8,
            maxdepth: 6,
            complexity_of_constants: 4,
            populations: 4,
            population_size: 40,
            niterations: 40,
            tournament_size: 8,
            crossover_probability: 0.066,
            parsimony: 0.0032,
            random_state: 1024,
            loss: LossKind::L2,
        }
    }
}

impl SrConfig {
    pub fn with_loss(mut self, loss: LossKind) -> Self {
        self.loss = loss;
        self
    }

    pub fn with_iterations(mut self, niterations: usize) -> Self {
        self.niterations = niterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Columns dropped before building the feature matrix
    pub fn excluded(&self) -> Vec<String> {
        let mut excluded = self.exclude_columns.clone();
        if !excluded.contains(&self.target) {
            excluded.push(self.target.clone());
        }
        excluded
    }
}
