//! Raw string table as read from disk

use crate::{Error, Result};

/// A delimited table before type inference: header plus rows of optional cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names in file order
    pub columns: Vec<String>,
    /// Row cells; `None` marks a missing value
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create an empty table with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; its width must match the header
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::Parse(format!(
                "row {} has {} fields, header has {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Borrow every cell of one column
    pub fn column_values(&self, idx: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(idx).and_then(|cell| cell.as_deref()))
            .collect()
    }

    /// Copy of the table without the named columns; unknown names are ignored
    pub fn drop_columns(&self, names: &[String]) -> RawTable {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i]))
            .collect();

        RawTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Copy of the table keeping only rows without missing cells
    pub fn drop_missing(&self) -> RawTable {
        RawTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| row.iter().all(Option::is_some))
                .cloned()
                .collect(),
        }
    }
}
