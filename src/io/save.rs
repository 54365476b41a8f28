//! Model saving

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::format::{ModelFormat, SaveConfig};
use super::snapshot::ModelSnapshot;
use crate::{Error, Result};

/// Write a snapshot to `path`, replacing any existing file
///
/// # Example
///
/// ```no_run
/// use phenosr::io::{save_model, ModelSnapshot, SaveConfig};
/// # fn demo(model: &phenosr::model::Model) -> phenosr::Result<()> {
/// let snapshot = ModelSnapshot::from_model("qlattice_three_genes", model);
/// save_model(&snapshot, "qlattice_three_genes_model.json", &SaveConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn save_model(snapshot: &ModelSnapshot, path: impl AsRef<Path>, config: &SaveConfig) -> Result<()> {
    let path = path.as_ref();

    let data = match config.format {
        ModelFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(snapshot)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(snapshot)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            }
        }
        ModelFormat::Yaml => serde_yaml::to_string(snapshot)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
    };

    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    tracing::debug!(path = %path.display(), "saved model");

    Ok(())
}
