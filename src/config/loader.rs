//! YAML loading

use std::fs;
use std::path::Path;

use super::schema::PipelineSpec;
use super::validate::validate_config;
use crate::{Error, Result};

/// Parse a pipeline spec without validating it
pub fn load_config_unchecked<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
}

/// Load and validate a pipeline spec from YAML
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<PipelineSpec> {
    let spec = load_config_unchecked(config_path)?;
    validate_config(&spec)?;
    Ok(spec)
}
