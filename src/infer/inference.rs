//! Type inference functions

use std::collections::HashSet;

use super::config::InferenceConfig;
use super::schema::InferredSchema;
use super::stats::ColumnStats;
use super::types::FeatureType;
use crate::data::RawTable;

/// Infer feature type from column statistics
pub fn infer_type(stats: &ColumnStats, config: &InferenceConfig) -> FeatureType {
    if config.exclude_columns.contains(&stats.name) {
        return FeatureType::Unknown;
    }

    if stats.null_count == stats.count {
        return FeatureType::Unknown;
    }

    if config.force_categorical.contains(&stats.name) || !stats.all_numeric {
        return FeatureType::Categorical;
    }

    FeatureType::Numeric
}

/// Infer schema from column statistics
pub fn infer_schema(stats: Vec<ColumnStats>, config: &InferenceConfig) -> InferredSchema {
    let mut schema = InferredSchema::default();

    for col_stats in stats {
        let feature_type = infer_type(&col_stats, config);
        schema.order.push(col_stats.name.clone());
        schema.features.insert(col_stats.name.clone(), feature_type);
        schema.stats.insert(col_stats.name.clone(), col_stats);
    }

    schema
}

/// Infer schema for every column of a raw table
pub fn infer_schema_from_table(table: &RawTable, config: &InferenceConfig) -> InferredSchema {
    let stats = table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| collect_stats_from_samples(name, &table.column_values(idx)))
        .collect();
    infer_schema(stats, config)
}

/// Collect statistics from sample values
pub fn collect_stats_from_samples(name: &str, values: &[Option<&str>]) -> ColumnStats {
    let mut stats = ColumnStats::new(name);
    stats.count = values.len();

    let mut unique: HashSet<&str> = HashSet::new();
    let mut all_numeric = true;
    let mut all_integers = true;

    for val in values {
        match val {
            Some(s) => {
                unique.insert(s);

                if s.trim().parse::<f64>().is_err() {
                    all_numeric = false;
                    all_integers = false;
                } else if s.trim().parse::<i64>().is_err() {
                    all_integers = false;
                }

                if stats.sample_values.len() < 10 {
                    stats.sample_values.push((*s).to_string());
                }
            }
            None => {
                stats.null_count += 1;
            }
        }
    }

    stats.unique_count = unique.len();
    stats.all_numeric = all_numeric && stats.null_count < stats.count;
    stats.all_integers = all_integers && stats.null_count < stats.count;

    stats
}
