//! Equation-search pipeline

use std::path::{Path, PathBuf};

use crate::data::load_table;
use crate::sr::{prepare_regression, write_equations, Equation, Regressor, SrConfig};
use crate::Result;

/// Outcome of [`run_regression`]
#[derive(Debug, Clone)]
pub struct RegressionSummary {
    pub rows: usize,
    pub features: Vec<String>,
    /// Pareto-front size
    pub n_equations: usize,
    pub best: Option<Equation>,
    pub equations: PathBuf,
}

/// Evolve equations for `config.target` in `input` and write them to `equations`
pub fn run_regression(
    input: impl AsRef<Path>,
    equations: impl AsRef<Path>,
    config: &SrConfig,
) -> Result<RegressionSummary> {
    let raw = load_table(input.as_ref())?;
    let data = prepare_regression(&raw, config)?;

    let hall = Regressor::new(config.clone()).fit(&data)?;
    write_equations(&hall, equations.as_ref())?;

    Ok(RegressionSummary {
        rows: data.n_rows(),
        features: data.names.clone(),
        n_equations: hall.pareto_front().len(),
        best: hall.best(),
        equations: equations.as_ref().to_path_buf(),
    })
}
