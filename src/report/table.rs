//! Results table

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::metrics::PartitionMetrics;
use crate::data::Frame;
use crate::model::Model;
use crate::Result;

/// Significant digits of the functional form in the table
const FORM_DIGITS: usize = 3;

/// One row of the results table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    /// 0-based search rank
    #[serde(rename = "Model")]
    pub rank: usize,
    #[serde(rename = "AUC Train")]
    pub auc_train: Option<f64>,
    #[serde(rename = "AUC Test")]
    pub auc_test: Option<f64>,
    #[serde(rename = "Accuracy Train")]
    pub accuracy_train: Option<f64>,
    #[serde(rename = "Accuracy Test")]
    pub accuracy_test: Option<f64>,
    /// BIC on the training partition
    #[serde(rename = "BIC")]
    pub bic: f64,
    #[serde(rename = "N. Features")]
    pub n_features: usize,
    #[serde(rename = "Functional form")]
    pub functional_form: String,
    /// Training loss
    #[serde(rename = "Loss")]
    pub loss: f64,
}

impl ModelReport {
    /// Evaluate `model` (search rank `rank`) on both partitions
    pub fn evaluate(rank: usize, model: &Model, train: &Frame, test: &Frame) -> Result<Self> {
        let train_metrics = PartitionMetrics::evaluate(model, train)?;
        let test_metrics = PartitionMetrics::evaluate(model, test)?;
        Ok(Self {
            rank,
            auc_train: train_metrics.auc(),
            auc_test: test_metrics.auc(),
            accuracy_train: train_metrics.accuracy(),
            accuracy_test: test_metrics.accuracy(),
            bic: model.bic(),
            n_features: model.features().len(),
            functional_form: model.sympify(FORM_DIGITS),
            loss: model.loss(),
        })
    }
}

/// Reports for ranked `models`, in order
pub fn build_reports(models: &[Model], train: &Frame, test: &Frame) -> Result<Vec<ModelReport>> {
    models
        .iter()
        .enumerate()
        .map(|(rank, model)| ModelReport::evaluate(rank, model, train, test))
        .collect()
}

/// `{output_dir}/{name}_table.csv`
pub fn table_path(output_dir: impl AsRef<Path>, name: &str) -> PathBuf {
    output_dir.as_ref().join(format!("{name}_table.csv"))
}

/// Write reports as CSV, replacing any existing file
pub fn write_results_table(path: impl AsRef<Path>, reports: &[ModelReport]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    if reports.is_empty() {
        writer.write_record([
            "Model",
            "AUC Train",
            "AUC Test",
            "Accuracy Train",
            "Accuracy Test",
            "BIC",
            "N. Features",
            "Functional form",
            "Loss",
        ])?;
    }
    for report in reports {
        writer.serialize(report)?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = reports.len(), "wrote results table");
    Ok(())
}

/// Read a table written by [`write_results_table`]
pub fn read_results_table(path: impl AsRef<Path>) -> Result<Vec<ModelReport>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut reports = Vec::new();
    for row in reader.deserialize() {
        reports.push(row?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn report(rank: usize) -> ModelReport {
        ModelReport {
            rank,
            auc_train: Some(0.9),
            auc_test: Some(0.8),
            accuracy_train: Some(0.85),
            accuracy_test: Some(0.75),
            bic: 42.5,
            n_features: 2,
            functional_form: "logreg(2*gene_a + 1)".to_string(),
            loss: 0.31,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = table_path(dir.path(), "qlattice_three_genes");
        write_results_table(&path, &[report(0), report(1)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Model,AUC Train,AUC Test,Accuracy Train,Accuracy Test,BIC,N. Features,Functional form,Loss")
        );
        assert!(lines.next().unwrap_or_default().starts_with("0,0.9,0.8"));
        assert_eq!(content.lines().count(), 3);
        assert!(path.ends_with("qlattice_three_genes_table.csv"));
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty_table.csv");
        write_results_table(&path, &[]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(read_results_table(&path).unwrap().is_empty());
    }

    #[test]
    fn test_rewrite_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run_table.csv");
        write_results_table(&path, &[report(0), report(1), report(2)]).unwrap();
        write_results_table(&path, &[report(0)]).unwrap();
        assert_eq!(read_results_table(&path).unwrap(), vec![report(0)]);
    }

    #[test]
    fn test_missing_metrics_are_empty_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reg_table.csv");
        let mut row = report(0);
        row.auc_train = None;
        row.auc_test = None;
        write_results_table(&path, &[row.clone()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().nth(1).unwrap_or_default().starts_with("0,,,"));
        assert_eq!(read_results_table(&path).unwrap(), vec![row]);
    }
}
