//! Regression losses

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::eval::mse;

/// Loss minimised by the regressor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    /// Mean squared error
    #[default]
    L2,
    /// Fraction of rows where prediction and target differ in sign
    SignMismatch,
}

impl LossKind {
    pub fn evaluate(self, y: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
        match self {
            Self::L2 => mse(y, pred),
            Self::SignMismatch => {
                if y.is_empty() {
                    return 0.0;
                }
                let mismatches = y
                    .iter()
                    .zip(pred.iter())
                    .filter(|(&t, &p)| (p < 0.0) != (t < 0.0))
                    .count();
                mismatches as f64 / y.len() as f64
            }
        }
    }
}

impl std::fmt::Display for LossKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L2 => write!(f, "l2"),
            Self::SignMismatch => write!(f, "sign"),
        }
    }
}

impl std::str::FromStr for LossKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l2" | "mse" => Ok(Self::L2),
            "sign" | "sign_mismatch" => Ok(Self::SignMismatch),
            other => Err(format!("unknown loss '{other}' (expected l2 or sign)")),
        }
    }
}
