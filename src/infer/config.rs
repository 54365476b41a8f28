//! Configuration for type inference

/// Configuration for type inference
#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    /// Column names to exclude from inference
    pub exclude_columns: Vec<String>,
    /// Column names forced to categorical even when every value parses as a number
    pub force_categorical: Vec<String>,
}

impl InferenceConfig {
    /// Exclude columns from inference
    pub fn with_exclude(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Force columns to be treated as categorical
    pub fn with_categorical(
        mut self,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.force_categorical = columns.into_iter().map(Into::into).collect();
        self
    }
}
