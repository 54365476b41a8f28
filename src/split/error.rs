//! Split error types

use thiserror::Error;

/// Stratified split errors
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("Invalid test size: {0} (must be > 0.0 and < 1.0)")]
    InvalidTestSize(f64),

    #[error("The least populated class '{class}' has only {count} member(s); at least 2 are needed to stratify")]
    TooFewMembers { class: String, count: usize },

    #[error("Test partition of {size} rows cannot hold all {n_classes} classes; increase test_size")]
    TestTooSmall { size: usize, n_classes: usize },

    #[error("Train partition of {size} rows cannot hold all {n_classes} classes; decrease test_size")]
    TrainTooSmall { size: usize, n_classes: usize },

    #[error("Cannot split an empty dataset")]
    Empty,
}
