//! Typed in-memory table

use ndarray::Array1;

use crate::{Error, Result};

/// A typed column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values
    Numeric(Array1<f64>),
    /// Category labels
    Categorical(Vec<String>),
}

impl Column {
    /// Number of values
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Whether the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column holds categories
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical(_))
    }

    /// Numeric values, if numeric
    pub fn as_numeric(&self) -> Option<&Array1<f64>> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Categorical(_) => None,
        }
    }

    /// Category labels, if categorical
    pub fn as_categorical(&self) -> Option<&[String]> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(v) => Some(v),
        }
    }

    /// Value at `row` rendered as a label
    pub fn label(&self, row: usize) -> String {
        match self {
            Self::Numeric(v) => v[row].to_string(),
            Self::Categorical(v) => v[row].clone(),
        }
    }

    /// Every value rendered as a label
    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.label(i)).collect()
    }

    /// Rows at the given positions, in the given order
    pub fn take(&self, indices: &[usize]) -> Column {
        match self {
            Self::Numeric(v) => Self::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Self::Categorical(v) => Self::Categorical(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

/// Ordered collection of equally long named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; its length must match existing columns
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::Parse(format!(
                    "column '{name}' has {} rows, frame has {}",
                    column.len(),
                    first.len()
                )));
            }
        }
        if self.names.contains(&name) {
            return Err(Error::Parse(format!("duplicate column '{name}'")));
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style [`Frame::push_column`]
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Column by name, failing with [`Error::MissingColumn`]
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Numeric column by name
    pub fn numeric(&self, name: &str) -> Result<&Array1<f64>> {
        self.require(name)?
            .as_numeric()
            .ok_or_else(|| Error::Parse(format!("column '{name}' is not numeric")))
    }

    /// Iterate `(name, column)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Every column except `target`, in order
    pub fn feature_names(&self, target: &str) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|n| *n != target)
            .collect()
    }

    /// New frame with the rows at `indices`
    pub fn take(&self, indices: &[usize]) -> Frame {
        Frame {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn frame() -> Frame {
        Frame::new()
            .with_column("gene_a", Column::Numeric(array![0.1, 0.2, 0.3]))
            .unwrap()
            .with_column(
                "gender",
                Column::Categorical(vec!["F".into(), "M".into(), "F".into()]),
            )
            .unwrap()
            .with_column("phenotype_reg", Column::Numeric(array![1.0, 0.0, 1.0]))
            .unwrap()
    }

    #[test]
    fn test_shape() {
        let f = frame();
        assert_eq!(f.n_rows(), 3);
        assert_eq!(f.n_cols(), 3);
        assert_eq!(f.feature_names("phenotype_reg"), vec!["gene_a", "gender"]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = frame()
            .with_column("short", Column::Numeric(array![1.0]))
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert!(frame()
            .with_column("gene_a", Column::Numeric(array![1.0, 2.0, 3.0]))
            .is_err());
    }

    #[test]
    fn test_take_preserves_order() {
        let sub = frame().take(&[2, 0]);
        assert_eq!(sub.n_rows(), 2);
        assert_eq!(sub.numeric("gene_a").unwrap(), &array![0.3, 0.1]);
        assert_eq!(sub.column("gender").unwrap().labels(), vec!["F", "F"]);
    }

    #[test]
    fn test_labels_of_numeric_column() {
        assert_eq!(
            frame().require("phenotype_reg").unwrap().labels(),
            vec!["1", "0", "1"]
        );
    }

    #[test]
    fn test_require_missing() {
        assert!(matches!(
            frame().require("nope"),
            Err(Error::MissingColumn(_))
        ));
        assert!(frame().numeric("gender").is_err());
    }
}
