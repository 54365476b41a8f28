//! Feature type enumeration

use serde::{Deserialize, Serialize};

/// Inferred feature type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Continuous numeric values
    Numeric,
    /// Discrete categories (any non-numeric column)
    Categorical,
    /// Excluded or entirely missing
    Unknown,
}

impl FeatureType {
    /// Short code used in semantic-type maps ("c" for categorical, "f" for numeric)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Numeric => "f",
            Self::Categorical => "c",
            Self::Unknown => "?",
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
