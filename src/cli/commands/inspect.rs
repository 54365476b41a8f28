//! Inspect command implementation

use std::collections::BTreeMap;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InspectArgs;
use crate::data::{load_table, preprocess, CleanedData, PreprocessConfig};
use crate::Result;

/// Row count per distinct target value
pub fn class_balance(cleaned: &CleanedData, target: &str) -> Result<BTreeMap<String, usize>> {
    let mut counts = BTreeMap::new();
    for label in cleaned.frame.require(target)?.labels() {
        *counts.entry(label).or_insert(0) += 1;
    }
    Ok(counts)
}

/// One line per retained column with its inferred type
pub fn format_columns(cleaned: &CleanedData) -> String {
    cleaned
        .schema
        .order
        .iter()
        .map(|name| {
            let kind = cleaned
                .schema
                .feature_type(name)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("  {name}: {kind}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_inspect(args: InspectArgs, level: LogLevel) -> std::result::Result<(), String> {
    let raw = load_table(&args.input).map_err(|e| e.to_string())?;
    let config = PreprocessConfig::new(&args.target).with_exclude(&args.exclude);
    let cleaned = preprocess(&raw, &config).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Table: {}", args.input.display()),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  Rows: {} ({} dropped for missing values)",
            cleaned.frame.n_rows(),
            cleaned.dropped_rows
        ),
    );
    log(level, LogLevel::Normal, "Columns:");
    log(level, LogLevel::Normal, &format_columns(&cleaned));

    let balance = class_balance(&cleaned, &args.target).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("Class balance ({}):", args.target),
    );
    let total = cleaned.frame.n_rows().max(1) as f64;
    for (label, count) in &balance {
        log(
            level,
            LogLevel::Normal,
            &format!("  {label}: {count} ({:.1}%)", 100.0 * *count as f64 / total),
        );
    }
    Ok(())
}
