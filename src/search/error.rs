//! Model search errors

use thiserror::Error;

/// Reasons the search cannot start
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Classification target without exactly two classes
    #[error("target '{column}' has {n_classes} distinct values, classification needs 2\n  → Use kind: regression or binarise the target")]
    NonBinaryTarget { column: String, n_classes: usize },

    /// Regression target with non-numeric values
    #[error("target '{0}' is not numeric, regression needs numeric values")]
    NonNumericTarget(String),

    /// Semantic type other than "c" (categorical) or "f" (numeric)
    #[error("unknown semantic type '{stype}' for column '{column}' (expected \"c\" or \"f\")")]
    UnknownStype { column: String, stype: String },

    /// Numeric semantic type on a column holding labels
    #[error("column '{0}' is declared numeric but holds labels")]
    NonNumericFeature(String),

    /// Nothing to build models from
    #[error("no input features besides the target")]
    NoFeatures,

    /// Training partition without rows
    #[error("training set is empty")]
    EmptyTrainingSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_binary_message() {
        let err = SearchError::NonBinaryTarget {
            column: "phenotype_reg".into(),
            n_classes: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("phenotype_reg"));
        assert!(msg.contains("3 distinct"));
    }
}
