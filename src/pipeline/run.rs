//! QLattice pipeline

use std::path::PathBuf;

use crate::config::{validate_config, PipelineSpec, RunSpec};
use crate::data::{load_table, preprocess};
use crate::infer::SemanticTypes;
use crate::prior::estimate_priors;
use crate::report::{build_reports, export_best, table_path, write_results_table, ExportPaths};
use crate::search::QLattice;
use crate::split::train_test_split;
use crate::{Error, Result};

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub name: String,
    /// Rows after cleaning
    pub rows: usize,
    pub dropped_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Columns handed to the search as categorical
    pub stypes: SemanticTypes,
    pub n_models: usize,
    /// Functional form of the top-ranked model
    pub best_expression: String,
    pub table: PathBuf,
    pub export: ExportPaths,
}

/// Validate `spec`, then process its runs in order
pub fn run_pipeline(spec: &PipelineSpec) -> Result<Vec<RunSummary>> {
    validate_config(spec)?;
    let mut summaries = Vec::with_capacity(spec.runs.len());
    for run in &spec.runs {
        summaries.push(run_one(spec, run)?);
    }
    Ok(summaries)
}

/// Search one table and write its results table and best-model export
pub fn run_one(spec: &PipelineSpec, run: &RunSpec) -> Result<RunSummary> {
    tracing::info!(run = %run.name, input = %run.input.display(), "starting run");

    let raw = load_table(&run.input)?;
    let cleaned = preprocess(&raw, &spec.preprocess_config())?;
    let stypes = cleaned.schema.stypes();

    let (train, test) = train_test_split(&cleaned.frame, &spec.target, spec.test_size, spec.seed)?;

    let priors = estimate_priors(&train, &spec.target, spec.prior_floor)?;
    let mut ql = QLattice::new(spec.seed);
    ql.update_priors(&priors);

    let models = ql.auto_run(&train, &spec.auto_run_spec(stypes.clone()))?;
    let best = models.first().ok_or(Error::NoModels)?;

    std::fs::create_dir_all(&spec.output_dir)?;
    let reports = build_reports(&models, &train, &test)?;
    let table = table_path(&spec.output_dir, &run.name);
    write_results_table(&table, &reports)?;

    let export = export_best(best, &run.name, &train, &test, &spec.output_dir)?;

    tracing::info!(run = %run.name, models = models.len(), "run complete");

    Ok(RunSummary {
        name: run.name.clone(),
        rows: cleaned.frame.n_rows(),
        dropped_rows: cleaned.dropped_rows,
        train_rows: train.n_rows(),
        test_rows: test.n_rows(),
        stypes,
        n_models: models.len(),
        best_expression: best.sympify(3),
        table,
        export,
    })
}
