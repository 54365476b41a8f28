//! Pipeline specification schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::PreprocessConfig;
use crate::eval::Criterion;
use crate::infer::SemanticTypes;
use crate::model::Kind;
use crate::search::AutoRunSpec;

/// One dataset to search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Label used for every output file of the run
    pub name: String,
    /// Tab- or comma-separated input table
    pub input: PathBuf,
}

impl RunSpec {
    pub fn new(name: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
        }
    }
}

/// Complete pipeline configuration
///
/// Every field has a default, so an empty YAML document is a valid spec that
/// runs both gene tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    /// Seed for the split and the search
    pub seed: u64,
    /// Fraction of rows held out for testing
    pub test_size: f64,
    /// Target column
    pub target: String,
    /// Columns dropped before anything else
    pub exclude_columns: Vec<String>,
    /// Columns forced to categorical
    pub categorical_columns: Vec<String>,
    pub kind: Kind,
    /// Lowest prior weight any feature receives
    pub prior_floor: f64,
    /// Directory receiving tables and exports
    pub output_dir: PathBuf,

    // Search tuning
    pub n_epochs: usize,
    pub max_complexity: usize,
    pub criterion: Criterion,
    pub sample_size: usize,
    pub fit_steps: usize,
    pub learning_rate: f64,
    pub pool_size: usize,
    pub max_models: usize,

    /// Datasets, processed in order
    pub runs: Vec<RunSpec>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        let search = AutoRunSpec::default();
        Self {
            seed: 1024,
            test_size: 0.33,
            target: "phenotype_reg".to_string(),
            exclude_columns: vec!["run".to_string(), "phenotype".to_string()],
            categorical_columns: Vec::new(),
            kind: Kind::Classification,
            prior_floor: 0.1,
            output_dir: PathBuf::from("."),
            n_epochs: search.n_epochs,
            max_complexity: search.max_complexity,
            criterion: search.criterion,
            sample_size: search.sample_size,
            fit_steps: search.fit_steps,
            learning_rate: search.learning_rate,
            pool_size: search.pool_size,
            max_models: search.max_models,
            runs: vec![
                RunSpec::new(
                    "qlattice_three_genes",
                    "../results/sym_reg/selected_genes_for_reg.tsv",
                ),
                RunSpec::new("qlattice_all_genes", "../results/sym_reg/genes_for_reg.tsv"),
            ],
        }
    }
}

impl PipelineSpec {
    /// Preprocessing settings for every run
    pub fn preprocess_config(&self) -> PreprocessConfig {
        let mut config = PreprocessConfig::new(&self.target).with_exclude(&self.exclude_columns);
        config.categorical_columns = self.categorical_columns.clone();
        config
    }

    /// Search settings for a run with the given semantic types
    pub fn auto_run_spec(&self, stypes: SemanticTypes) -> AutoRunSpec {
        AutoRunSpec {
            output_name: self.target.clone(),
            kind: self.kind,
            stypes,
            n_epochs: self.n_epochs,
            max_complexity: self.max_complexity,
            criterion: self.criterion,
            sample_size: self.sample_size,
            fit_steps: self.fit_steps,
            learning_rate: self.learning_rate,
            pool_size: self.pool_size,
            max_models: self.max_models,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = PipelineSpec::default();
        assert_eq!(spec.seed, 1024);
        assert!((spec.test_size - 0.33).abs() < 1e-12);
        assert_eq!(spec.target, "phenotype_reg");
        assert_eq!(spec.exclude_columns, vec!["run", "phenotype"]);
        assert_eq!(spec.n_epochs, 20);
        assert!((spec.prior_floor - 0.1).abs() < 1e-12);
        assert_eq!(spec.runs.len(), 2);
        assert_eq!(spec.runs[0].name, "qlattice_three_genes");
        assert_eq!(spec.runs[1].name, "qlattice_all_genes");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let spec: PipelineSpec = serde_yaml::from_str("{}").unwrap();
        assert_eq!(spec, PipelineSpec::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "
seed: 7
kind: regression
criterion: aic
runs:
  - name: small
    input: data/small.tsv
";
        let spec: PipelineSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.seed, 7);
        assert_eq!(spec.kind, Kind::Regression);
        assert_eq!(spec.criterion, Criterion::Aic);
        assert_eq!(spec.runs, vec![RunSpec::new("small", "data/small.tsv")]);
        assert_eq!(spec.target, "phenotype_reg");
    }

    #[test]
    fn test_auto_run_spec_carries_settings() {
        let spec = PipelineSpec {
            n_epochs: 3,
            ..Default::default()
        };
        let stypes: SemanticTypes = [("gender".to_string(), "c".to_string())].into_iter().collect();
        let auto = spec.auto_run_spec(stypes.clone());
        assert_eq!(auto.n_epochs, 3);
        assert_eq!(auto.output_name, "phenotype_reg");
        assert_eq!(auto.stypes, stypes);
    }
}
