//! Configuration validation logic

use std::collections::BTreeSet;

use super::error::ValidationError;
use crate::config::schema::PipelineSpec;

/// Validate a pipeline specification
///
/// Input paths are not checked here; a missing table fails its run with
/// `FileNotFound`.
pub fn validate_config(spec: &PipelineSpec) -> Result<(), ValidationError> {
    if !(spec.test_size > 0.0 && spec.test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(spec.test_size));
    }

    if spec.n_epochs == 0 {
        return Err(ValidationError::InvalidEpochs(spec.n_epochs));
    }

    if !(0.0..=1.0).contains(&spec.prior_floor) {
        return Err(ValidationError::InvalidPriorFloor(spec.prior_floor));
    }

    if spec.target.trim().is_empty() {
        return Err(ValidationError::EmptyTarget);
    }
    if spec.exclude_columns.contains(&spec.target) {
        return Err(ValidationError::TargetExcluded(spec.target.clone()));
    }

    if spec.sample_size == 0 {
        return Err(ValidationError::InvalidSampleSize(spec.sample_size));
    }
    if spec.fit_steps == 0 {
        return Err(ValidationError::InvalidFitSteps(spec.fit_steps));
    }
    if !(spec.learning_rate > 0.0 && spec.learning_rate.is_finite()) {
        return Err(ValidationError::InvalidLearningRate(spec.learning_rate));
    }
    if spec.max_complexity == 0 {
        return Err(ValidationError::InvalidMaxComplexity(spec.max_complexity));
    }
    if spec.pool_size == 0 {
        return Err(ValidationError::InvalidPoolSize(spec.pool_size));
    }
    if spec.max_models == 0 {
        return Err(ValidationError::InvalidMaxModels(spec.max_models));
    }

    if spec.runs.is_empty() {
        return Err(ValidationError::NoRuns);
    }
    let mut names = BTreeSet::new();
    for run in &spec.runs {
        if run.name.trim().is_empty() {
            return Err(ValidationError::EmptyRunName);
        }
        if !names.insert(run.name.as_str()) {
            return Err(ValidationError::DuplicateRunName(run.name.clone()));
        }
    }

    Ok(())
}
