//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! phenosr run --config pipeline.yaml
//! phenosr run --epochs 5 --seed 7 --output-dir ./results
//! phenosr validate pipeline.yaml
//! phenosr inspect ../results/sym_reg/selected_genes_for_reg.tsv
//! phenosr regress --input ../results/sym_reg/selected_genes_for_reg.tsv --equations equations.csv
//! ```

mod core;


pub use core::{apply_overrides, parse_args, Cli, Command, InspectArgs, RegressArgs, RunArgs, ValidateArgs};
