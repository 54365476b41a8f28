//! Model output kind

use serde::{Deserialize, Serialize};

/// What the output node predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Probability of the positive class (logistic output, cross-entropy loss)
    #[default]
    Classification,
    /// Real value (linear output, squared-error loss)
    Regression,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classification => write!(f, "classification"),
            Self::Regression => write!(f, "regression"),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classification" | "classifier" => Ok(Self::Classification),
            "regression" | "regressor" => Ok(Self::Regression),
            other => Err(format!(
                "unknown kind '{other}' (expected classification or regression)"
            )),
        }
    }
}
