//! Feature matrix preparation

use ndarray::{Array1, Array2};

use super::config::SrConfig;
use crate::data::RawTable;
use crate::{Error, Result};

/// Numeric design matrix with its target
#[derive(Debug, Clone)]
pub struct RegressionData {
    /// Rows are samples, columns follow `names`
    pub x: Array2<f64>,
    pub y: Array1<f64>,
    /// Feature names in sorted order
    pub names: Vec<String>,
}

impl RegressionData {
    pub fn n_rows(&self) -> usize {
        self.y.len()
    }
}

fn parse_cell(column: &str, cell: Option<&str>) -> Result<f64> {
    let text = cell.unwrap_or_default().trim();
    text.parse::<f64>().map_err(|_| {
        Error::Parse(format!(
            "column '{column}' has non-numeric value '{text}'; regression features must be numeric"
        ))
    })
}

/// Drop incomplete rows, then build a matrix of every non-excluded column
pub fn prepare_regression(raw: &RawTable, config: &SrConfig) -> Result<RegressionData> {
    let target_idx = raw
        .column_index(&config.target)
        .ok_or_else(|| Error::MissingColumn(config.target.clone()))?;

    let complete = raw.drop_missing();
    if complete.n_rows() == 0 {
        return Err(Error::EmptyDataset(
            "no complete rows remain after dropping missing values".into(),
        ));
    }

    let excluded = config.excluded();
    let mut names: Vec<String> = complete
        .columns
        .iter()
        .filter(|c| !excluded.contains(c))
        .cloned()
        .collect();
    names.sort();
    names.dedup();
    if names.is_empty() {
        return Err(Error::Parse("no feature columns left for regression".into()));
    }

    let y = complete
        .column_values(target_idx)
        .into_iter()
        .map(|cell| parse_cell(&config.target, cell))
        .collect::<Result<Array1<f64>>>()?;

    let mut x = Array2::zeros((complete.n_rows(), names.len()));
    for (j, name) in names.iter().enumerate() {
        let idx = complete
            .column_index(name)
            .ok_or_else(|| Error::MissingColumn(name.clone()))?;
        for (i, cell) in complete.column_values(idx).into_iter().enumerate() {
            x[[i, j]] = parse_cell(name, cell)?;
        }
    }

    Ok(RegressionData { x, y, names })
}
