//! Inferred schema representation

use std::collections::BTreeMap;

use super::stats::ColumnStats;
use super::types::FeatureType;

/// Semantic-type annotations handed to the model search: feature name -> type code.
///
/// Only categorical columns are listed; anything absent is numeric.
pub type SemanticTypes = BTreeMap<String, String>;

/// Inferred schema for a dataset
#[derive(Debug, Clone, Default)]
pub struct InferredSchema {
    /// Column names in table order
    pub order: Vec<String>,
    /// Feature name -> inferred type
    pub features: BTreeMap<String, FeatureType>,
    /// Column statistics used for inference
    pub stats: BTreeMap<String, ColumnStats>,
}

impl InferredSchema {
    /// Inferred type of a column
    pub fn feature_type(&self, name: &str) -> Option<FeatureType> {
        self.features.get(name).copied()
    }

    /// Columns of a specific type, in table order
    pub fn features_of_type(&self, feature_type: FeatureType) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| self.features.get(name.as_str()) == Some(&feature_type))
            .map(String::as_str)
            .collect()
    }

    /// Categorical columns, in table order
    pub fn categorical(&self) -> Vec<&str> {
        self.features_of_type(FeatureType::Categorical)
    }

    /// Numeric columns, in table order
    pub fn numeric(&self) -> Vec<&str> {
        self.features_of_type(FeatureType::Numeric)
    }

    /// Semantic-type map for the search engine
    pub fn stypes(&self) -> SemanticTypes {
        self.categorical()
            .into_iter()
            .map(|name| (name.to_string(), FeatureType::Categorical.code().to_string()))
            .collect()
    }
}
