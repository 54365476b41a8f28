//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::{PipelineSpec, RunSpec};

fn create_valid_spec() -> PipelineSpec {
    PipelineSpec {
        runs: vec![RunSpec::new("three_genes", "data/three.tsv")],
        ..Default::default()
    }
}

#[test]
fn test_valid_config() {
    assert!(validate_config(&create_valid_spec()).is_ok());
    assert!(validate_config(&PipelineSpec::default()).is_ok());
}

#[test]
fn test_invalid_test_size() {
    for test_size in [0.0, 1.0, -0.2, f64::NAN] {
        let mut spec = create_valid_spec();
        spec.test_size = test_size;
        assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidTestSize(_))
        ));
    }
}

#[test]
fn test_invalid_epochs() {
    let mut spec = create_valid_spec();
    spec.n_epochs = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidEpochs(0)));
}

#[test]
fn test_invalid_prior_floor() {
    let mut spec = create_valid_spec();
    spec.prior_floor = 1.1;
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::InvalidPriorFloor(1.1))
    );
}

#[test]
fn test_prior_floor_bounds_inclusive() {
    let mut spec = create_valid_spec();
    spec.prior_floor = 0.0;
    assert!(validate_config(&spec).is_ok());
    spec.prior_floor = 1.0;
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_empty_target() {
    let mut spec = create_valid_spec();
    spec.target = "  ".to_string();
    assert_eq!(validate_config(&spec), Err(ValidationError::EmptyTarget));
}

#[test]
fn test_target_excluded() {
    let mut spec = create_valid_spec();
    spec.exclude_columns.push("phenotype_reg".to_string());
    assert!(matches!(
        validate_config(&spec),
        Err(ValidationError::TargetExcluded(_))
    ));
}

#[test]
fn test_no_runs() {
    let mut spec = create_valid_spec();
    spec.runs.clear();
    assert_eq!(validate_config(&spec), Err(ValidationError::NoRuns));
}

#[test]
fn test_duplicate_run_names() {
    let mut spec = create_valid_spec();
    spec.runs.push(RunSpec::new("three_genes", "data/other.tsv"));
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::DuplicateRunName("three_genes".to_string()))
    );
}

#[test]
fn test_search_settings() {
    let mut spec = create_valid_spec();
    spec.sample_size = 0;
    assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidSampleSize(0))));

    let mut spec = create_valid_spec();
    spec.fit_steps = 0;
    assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidFitSteps(0))));

    let mut spec = create_valid_spec();
    spec.learning_rate = 0.0;
    assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidLearningRate(_))));

    let mut spec = create_valid_spec();
    spec.max_complexity = 0;
    assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidMaxComplexity(0))));
}

#[test]
fn test_error_messages() {
    let err = ValidationError::InvalidTestSize(1.5);
    assert!(err.to_string().contains("(0.0, 1.0)"));
    let err = ValidationError::DuplicateRunName("a".into());
    assert!(err.to_string().contains("collide"));
}
