//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid test size: {0} (must be in (0.0, 1.0))")]
    InvalidTestSize(f64),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid prior floor: {0} (must be in [0.0, 1.0])")]
    InvalidPriorFloor(f64),

    #[error("Target column name cannot be empty")]
    EmptyTarget,

    #[error("Target column '{0}' is also listed in exclude_columns")]
    TargetExcluded(String),

    #[error("No runs configured")]
    NoRuns,

    #[error("Run name cannot be empty")]
    EmptyRunName,

    #[error("Duplicate run name: {0} (output files would collide)")]
    DuplicateRunName(String),

    #[error("Invalid sample size: {0} (must be > 0)")]
    InvalidSampleSize(usize),

    #[error("Invalid fit steps: {0} (must be > 0)")]
    InvalidFitSteps(usize),

    #[error("Invalid learning rate: {0} (must be > 0.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid max complexity: {0} (must be > 0)")]
    InvalidMaxComplexity(usize),

    #[error("Invalid pool size: {0} (must be > 0)")]
    InvalidPoolSize(usize),

    #[error("Invalid max models: {0} (must be > 0)")]
    InvalidMaxModels(usize),
}
