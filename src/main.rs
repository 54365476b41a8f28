//! phenosr CLI
//!
//! # Usage
//!
//! ```bash
//! # Search both default gene tables
//! phenosr run
//!
//! # Search with a config and overrides
//! phenosr run --config pipeline.yaml --epochs 40 --seed 7
//!
//! # Validate config
//! phenosr validate pipeline.yaml
//!
//! # Column types and class balance of a table
//! phenosr inspect genes_for_reg.tsv
//!
//! # Evolve regression equations with the sign loss
//! phenosr regress --input genes_for_reg.tsv --loss sign
//! ```

use clap::Parser;
use phenosr::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
