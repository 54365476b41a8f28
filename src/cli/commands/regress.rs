//! Regress command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::RegressArgs;
use crate::pipeline::run_regression;
use crate::sr::SrConfig;

/// Regressor settings for the given arguments
pub fn regress_config(args: &RegressArgs) -> SrConfig {
    let mut config = SrConfig::default().with_loss(args.loss);
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
}

pub fn run_regress(args: RegressArgs, level: LogLevel) -> Result<(), String> {
    let config = regress_config(&args);
    log(
        level,
        LogLevel::Normal,
        &format!(
            "phenosr: evolving equations for {} in {} (loss {})",
            config.target,
            args.input.display(),
            config.loss
        ),
    );

    let summary =
        run_regression(&args.input, &args.equations, &config).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!("  Features: {}", summary.features.join(", ")),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "{} rows, {} equations written to {}",
            summary.rows,
            summary.n_equations,
            summary.equations.display()
        ),
    );
    if let Some(best) = &summary.best {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  Best: {} (complexity {}, loss {:.4})",
                best.equation, best.complexity, best.loss
            ),
        );
    }
    Ok(())
}
