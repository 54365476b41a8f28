//! Information criteria for model selection
//!
//! Both criteria trade goodness of fit against the number of fitted
//! parameters `k` on `n` rows. Classification uses the binary cross-entropy
//! (the mean negative log-likelihood), regression the mean squared error.

use serde::{Deserialize, Serialize};

use crate::model::Kind;

/// Ranking criterion for candidate models (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Bayesian information criterion
    #[default]
    Bic,
    /// Akaike information criterion
    Aic,
    /// Raw training loss
    Loss,
}

impl Criterion {
    /// Score a model with training loss `loss`, `k` parameters and `n` rows
    pub fn score(self, kind: Kind, loss: f64, n: usize, k: usize) -> f64 {
        match self {
            Self::Bic => bic(kind, loss, n, k),
            Self::Aic => aic(kind, loss, n, k),
            Self::Loss => loss,
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bic => write!(f, "bic"),
            Self::Aic => write!(f, "aic"),
            Self::Loss => write!(f, "loss"),
        }
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bic" => Ok(Self::Bic),
            "aic" => Ok(Self::Aic),
            "loss" => Ok(Self::Loss),
            other => Err(format!("unknown criterion '{other}' (expected bic, aic or loss)")),
        }
    }
}

fn fit_term(kind: Kind, loss: f64, n: f64) -> f64 {
    match kind {
        Kind::Classification => 2.0 * n * loss,
        Kind::Regression => n * loss.max(f64::MIN_POSITIVE).ln(),
    }
}

/// Bayesian information criterion
pub fn bic(kind: Kind, loss: f64, n: usize, k: usize) -> f64 {
    let n = n as f64;
    fit_term(kind, loss, n) + k as f64 * n.max(1.0).ln()
}

/// Akaike information criterion
pub fn aic(kind: Kind, loss: f64, n: usize, k: usize) -> f64 {
    fit_term(kind, loss, n as f64) + 2.0 * k as f64
}
