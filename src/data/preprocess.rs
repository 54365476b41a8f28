//! Column exclusion, missing-value removal and typing

use ndarray::Array1;

use super::frame::{Column, Frame};
use super::table::RawTable;
use crate::infer::{infer_schema_from_table, FeatureType, InferenceConfig, InferredSchema};
use crate::{Error, Result};

/// Settings for turning a raw table into a typed frame
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Column that must survive cleaning
    pub target: String,
    /// Columns dropped before anything else
    pub exclude_columns: Vec<String>,
    /// Columns forced to categorical
    pub categorical_columns: Vec<String>,
}

impl PreprocessConfig {
    /// Create a config for the given target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            exclude_columns: Vec::new(),
            categorical_columns: Vec::new(),
        }
    }

    /// Set the excluded columns
    pub fn with_exclude(mut self, columns: &[String]) -> Self {
        self.exclude_columns = columns.to_vec();
        self
    }
}

/// Output of [`preprocess`]
#[derive(Debug, Clone)]
pub struct CleanedData {
    /// Typed table, target included
    pub frame: Frame,
    /// Inferred type of every retained column
    pub schema: InferredSchema,
    /// Rows dropped for missing values
    pub dropped_rows: usize,
}

/// Drop excluded columns, drop rows with missing values, infer types
pub fn preprocess(raw: &RawTable, config: &PreprocessConfig) -> Result<CleanedData> {
    let retained = raw.drop_columns(&config.exclude_columns);
    if retained.column_index(&config.target).is_none() {
        return Err(Error::MissingColumn(config.target.clone()));
    }

    let cleaned = retained.drop_missing();
    let dropped_rows = retained.n_rows() - cleaned.n_rows();
    if cleaned.n_rows() == 0 {
        return Err(Error::EmptyDataset(format!(
            "all {} rows contain missing values",
            retained.n_rows()
        )));
    }

    let inference = InferenceConfig::default().with_categorical(config.categorical_columns.clone());
    let schema = infer_schema_from_table(&cleaned, &inference);

    let mut frame = Frame::new();
    for (idx, name) in cleaned.columns.iter().enumerate() {
        let values = cleaned.column_values(idx);
        let column = match schema.feature_type(name) {
            Some(FeatureType::Numeric) => Column::Numeric(parse_numeric(name, &values)?),
            _ => Column::Categorical(values.iter().map(|v| v.unwrap_or_default().to_string()).collect()),
        };
        frame.push_column(name.clone(), column)?;
    }

    tracing::info!(
        rows = frame.n_rows(),
        columns = frame.n_cols(),
        dropped_rows,
        categorical = ?schema.categorical(),
        "preprocessed table"
    );

    Ok(CleanedData {
        frame,
        schema,
        dropped_rows,
    })
}

fn parse_numeric(name: &str, values: &[Option<&str>]) -> Result<Array1<f64>> {
    values
        .iter()
        .map(|v| {
            let s = v.unwrap_or_default().trim();
            s.parse::<f64>()
                .map_err(|e| Error::Parse(format!("column '{name}': '{s}': {e}")))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Array1::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawTable {
        let mut t = RawTable::new(
            ["run", "phenotype", "phenotype_reg", "gene_a", "gender"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        for (i, (g, sex, y)) in [("0.1", "F", "1"), ("0.5", "M", "0"), ("0.9", "F", "1")]
            .iter()
            .enumerate()
        {
            t.push_row(vec![
                Some(format!("r{i}")),
                None,
                Some((*y).to_string()),
                Some((*g).to_string()),
                Some((*sex).to_string()),
            ])
            .unwrap();
        }
        t
    }

    fn config() -> PreprocessConfig {
        PreprocessConfig::new("phenotype_reg")
            .with_exclude(&["run".to_string(), "phenotype".to_string()])
    }

    #[test]
    fn test_excluded_columns_do_not_drop_rows() {
        // `phenotype` is entirely missing but excluded first
        let cleaned = preprocess(&raw(), &config()).unwrap();
        assert_eq!(cleaned.frame.n_rows(), 3);
        assert_eq!(cleaned.dropped_rows, 0);
        assert_eq!(
            cleaned.frame.names(),
            &["phenotype_reg", "gene_a", "gender"]
        );
    }

    #[test]
    fn test_types_are_inferred() {
        let cleaned = preprocess(&raw(), &config()).unwrap();
        assert!(cleaned.frame.column("gender").unwrap().is_categorical());
        assert!(cleaned.frame.column("gene_a").unwrap().as_numeric().is_some());
        assert_eq!(cleaned.schema.categorical(), vec!["gender"]);
    }

    #[test]
    fn test_missing_target() {
        let cfg = PreprocessConfig::new("nope");
        assert!(matches!(
            preprocess(&raw(), &cfg),
            Err(Error::MissingColumn(c)) if c == "nope"
        ));
    }

    #[test]
    fn test_excluding_target_is_missing_column() {
        let cfg = PreprocessConfig::new("phenotype_reg").with_exclude(&["phenotype_reg".to_string()]);
        assert!(matches!(preprocess(&raw(), &cfg), Err(Error::MissingColumn(_))));
    }

    #[test]
    fn test_all_rows_missing() {
        let cfg = PreprocessConfig::new("phenotype_reg");
        assert!(matches!(preprocess(&raw(), &cfg), Err(Error::EmptyDataset(_))));
    }
}
