//! Pipeline configuration
//!
//! A [`PipelineSpec`] is read from YAML, validated, then optionally
//! overridden from the command line.

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, InspectArgs, RegressArgs, RunArgs, ValidateArgs};
pub use loader::{load_config, load_config_unchecked};
pub use schema::{PipelineSpec, RunSpec};
pub use validate::{validate_config, ValidationError};
