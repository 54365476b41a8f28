//! Error types for phenosr
//!
//! Every fallible operation returns [`Result`]. Module-level error enums
//! (`ValidationError`, `SplitError`, `SearchError`) convert into [`Error`]
//! so callers can use `?` across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;
use crate::search::SearchError;
use crate::split::SplitError;

/// Result type alias for phenosr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading data, searching, or exporting models
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input table not found
    #[error("Input file not found: {}\n  → Check the run's `input` path (relative paths resolve from the working directory)", path.display())]
    FileNotFound { path: PathBuf },

    /// Table content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required column is not present
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// No rows left to work with
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Stratified split failed
    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    /// Model search failed
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Search completed without a single valid model
    #[error("Search returned no valid models\n  → Increase n_epochs or sample_size, or check the target column")]
    NoModels,

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration values out of range
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Chart drawing failed
    #[error("Render error: {0}")]
    Render(String),

    /// Report template failed to parse or render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    /// Whether the user can fix this error by changing inputs or configuration
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::Parse(_)
                | Self::MissingColumn(_)
                | Self::EmptyDataset(_)
                | Self::Split(_)
                | Self::Config(_)
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_mentions_path() {
        let err = Error::FileNotFound {
            path: "data/genes.tsv".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("genes.tsv"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_split_error_is_user_error() {
        let err: Error = SplitError::TooFewMembers {
            class: "1".into(),
            count: 1,
        }
        .into();
        assert!(err.is_user_error());
        assert!(err.to_string().contains("Split error"));
    }

    #[test]
    fn test_template_error_converts() {
        let err: Error = tera::Error::msg("unexpected end of template").into();
        assert!(matches!(err, Error::Template(_)));
        assert!(err.to_string().contains("Template error"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_no_models_is_actionable() {
        let msg = Error::NoModels.to_string();
        assert!(msg.contains("n_epochs"));
    }
}
