//! Run command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config_unchecked, validate_config, PipelineSpec, RunArgs};
use crate::pipeline::{run_pipeline, RunSummary};

pub fn run_run(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = match &args.config {
        Some(path) => {
            log(
                level,
                LogLevel::Normal,
                &format!("phenosr: running {}", path.display()),
            );
            load_config_unchecked(path).map_err(|e| e.to_string())?
        }
        None => {
            log(level, LogLevel::Normal, "phenosr: running default pipeline");
            PipelineSpec::default()
        }
    };

    // Overrides apply before validation so they can repair a config
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Invalid config: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Target: {} ({}), seed {}, {} epochs",
            spec.target, spec.kind, spec.seed, spec.n_epochs
        ),
    );

    let summaries = run_pipeline(&spec).map_err(|e| e.to_string())?;
    for summary in &summaries {
        log_summary(level, summary);
    }

    log(level, LogLevel::Normal, "Done!");
    Ok(())
}

fn log_summary(level: LogLevel, summary: &RunSummary) {
    log(
        level,
        LogLevel::Normal,
        &format!(
            "{}: {} rows ({} train / {} test), {} models",
            summary.name, summary.rows, summary.train_rows, summary.test_rows, summary.n_models
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Best: {}", summary.best_expression),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Dropped rows: {}", summary.dropped_rows),
    );
    if !summary.stypes.is_empty() {
        let categorical: Vec<&str> = summary.stypes.keys().map(String::as_str).collect();
        log(
            level,
            LogLevel::Verbose,
            &format!("  Categorical: {}", categorical.join(", ")),
        );
    }
    log(
        level,
        LogLevel::Verbose,
        &format!("  Table: {}", summary.table.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Exported: {}, {}, {}",
            summary.export.summary.display(),
            summary.export.signal.display(),
            summary.export.model.display()
        ),
    );
}
