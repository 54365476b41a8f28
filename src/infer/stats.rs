//! Column statistics for type inference

/// Statistics about a column used for type inference
#[derive(Debug, Clone, Default)]
pub struct ColumnStats {
    /// Column name
    pub name: String,
    /// Number of rows
    pub count: usize,
    /// Number of unique non-null values
    pub unique_count: usize,
    /// Number of null/missing values
    pub null_count: usize,
    /// Whether all non-null values are integers
    pub all_integers: bool,
    /// Whether all non-null values are numeric
    pub all_numeric: bool,
    /// Sample values for display
    pub sample_values: Vec<String>,
}

impl ColumnStats {
    /// Create stats for a column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Cardinality ratio: unique_count / count
    pub fn cardinality_ratio(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.unique_count as f32 / self.count as f32
        }
    }

    /// Null ratio: null_count / count
    pub fn null_ratio(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.null_count as f32 / self.count as f32
        }
    }
}
