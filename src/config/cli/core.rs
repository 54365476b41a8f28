//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PipelineSpec;
use crate::model::Kind;
use crate::sr::LossKind;

/// phenosr: symbolic-regression model search for phenotype tables
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "phenosr")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Search interpretable models that explain a phenotype from gene expression")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the model search over every configured table
    Run(RunArgs),

    /// Validate a configuration file without running
    Validate(ValidateArgs),

    /// Show inferred column types and class balance of a table
    Inspect(InspectArgs),

    /// Evolve closed-form regression equations for the target
    Regress(RegressArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Pipeline YAML (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override number of search epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override the random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the model kind (classification or regression)
    #[arg(short, long)]
    pub kind: Option<Kind>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to pipeline YAML
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the inspect command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Table to inspect
    #[arg(value_name = "TABLE")]
    pub input: PathBuf,

    /// Target column for the class balance
    #[arg(short, long, default_value = "phenotype_reg")]
    pub target: String,

    /// Columns to drop before inspecting
    #[arg(long, value_delimiter = ',', default_value = "run,phenotype")]
    pub exclude: Vec<String>,
}

/// Arguments for the regress command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RegressArgs {
    /// Input table
    #[arg(short, long)]
    pub input: PathBuf,

    /// Equations CSV to write
    #[arg(short, long, default_value = "equations.csv")]
    pub equations: PathBuf,

    /// Loss: l2 or sign
    #[arg(short, long, default_value = "l2")]
    pub loss: LossKind,

    /// Evolution iterations
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Parse command line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a PipelineSpec
pub fn apply_overrides(spec: &mut PipelineSpec, args: &RunArgs) {
    if let Some(output_dir) = &args.output_dir {
        spec.output_dir = output_dir.clone();
    }
    if let Some(epochs) = args.epochs {
        spec.n_epochs = epochs;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(kind) = args.kind {
        spec.kind = kind;
    }
}
