//! Feature type inference from raw column values
//!
//! Decides, per column, whether values are numeric or categorical. Any column
//! with a non-numeric value is categorical; the search engine receives the
//! categorical set as its semantic-type annotation map.

mod config;
mod inference;
mod schema;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use config::InferenceConfig;
pub use inference::{collect_stats_from_samples, infer_schema, infer_schema_from_table, infer_type};
pub use schema::{InferredSchema, SemanticTypes};
pub use stats::ColumnStats;
pub use types::FeatureType;
