//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, PipelineSpec, ValidateArgs};

/// Format split and prior settings as a string
pub fn format_data_info(spec: &PipelineSpec) -> String {
    let mut lines = vec![
        format!("  Target: {} ({})", spec.target, spec.kind),
        format!("  Test size: {}", spec.test_size),
        format!("  Seed: {}", spec.seed),
        format!("  Prior floor: {}", spec.prior_floor),
    ];
    if !spec.exclude_columns.is_empty() {
        lines.push(format!("  Excluded: {}", spec.exclude_columns.join(", ")));
    }
    if !spec.categorical_columns.is_empty() {
        lines.push(format!("  Categorical: {}", spec.categorical_columns.join(", ")));
    }
    lines.join("\n")
}

/// Format search settings as a string
pub fn format_search_info(spec: &PipelineSpec) -> String {
    [
        format!("  Epochs: {}", spec.n_epochs),
        format!("  Criterion: {}", spec.criterion),
        format!("  Max complexity: {}", spec.max_complexity),
        format!("  Sample size: {}", spec.sample_size),
        format!("  Fit: {} steps at lr {}", spec.fit_steps, spec.learning_rate),
        format!("  Pool: {} (keep {})", spec.pool_size, spec.max_models),
    ]
    .join("\n")
}

/// Format the run list as a string
pub fn format_runs_info(spec: &PipelineSpec) -> String {
    let mut lines = vec![format!("  Output dir: {}", spec.output_dir.display())];
    for run in &spec.runs {
        lines.push(format!("  {} <- {}", run.name, run.input.display()));
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "✓ Configuration is valid");
    log(level, LogLevel::Normal, "");
    log(level, LogLevel::Normal, &format_data_info(&spec));
    log(level, LogLevel::Verbose, &format_search_info(&spec));
    log(level, LogLevel::Normal, &format_runs_info(&spec));

    Ok(())
}
