//! Model loading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::format::ModelFormat;
use super::snapshot::ModelSnapshot;
use crate::{Error, Result};

/// Load a snapshot, detecting the format from the file extension
///
/// ```no_run
/// use phenosr::io::load_model;
///
/// let snapshot = load_model("qlattice_three_genes_model.json").expect("failed to load model");
/// println!("Loaded {}: {}", snapshot.metadata.name, snapshot.expression);
/// ```
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelSnapshot> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Serialization("File has no extension".to_string()))?;
    let format = ModelFormat::from_extension(ext)
        .ok_or_else(|| Error::Serialization(format!("Unsupported file extension: {ext}")))?;

    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    let snapshot: ModelSnapshot = match format {
        ModelFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?,
        ModelFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}")))?,
    };

    // Reject graphs that would not evaluate
    snapshot.to_model()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Column, Frame};
    use crate::io::{save_model, SaveConfig};
    use crate::model::{Kind, Model, Node, Op};
    use ndarray::array;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn model() -> Model {
        let weights: BTreeMap<String, f64> =
            [("F".to_string(), 0.3), ("M".to_string(), -0.4)].into_iter().collect();
        Model::from_nodes(
            "phenotype_reg",
            Kind::Classification,
            vec![
                Node::Numeric {
                    name: "gene_a".into(),
                    center: 0.1,
                    scale: 0.7,
                    w: 1.3,
                    b: 0.2,
                },
                Node::Categorical {
                    name: "gender".into(),
                    bias: 0.05,
                    weights,
                },
                Node::Interaction {
                    op: Op::Add,
                    params: vec![0.9, 1.1, -0.3],
                },
                Node::Interaction {
                    op: Op::Tanh,
                    params: vec![],
                },
                Node::Output {
                    kind: Kind::Classification,
                    w: 2.0,
                    b: -0.1,
                },
            ],
        )
        .unwrap()
        .with_positive_class("1")
    }

    fn frame() -> Frame {
        Frame::new()
            .with_column("gene_a", Column::Numeric(array![0.3, -1.2, 2.5]))
            .unwrap()
            .with_column(
                "gender",
                Column::Categorical(vec!["F".into(), "M".into(), "F".into()]),
            )
            .unwrap()
    }

    #[test]
    fn test_round_trip_predictions_match() {
        let dir = TempDir::new().unwrap();
        for ext in ["json", "yaml"] {
            let path = dir.path().join(format!("model.{ext}"));
            let format = ModelFormat::from_extension(ext).unwrap();
            let snapshot = ModelSnapshot::from_model("m", &model());
            save_model(&snapshot, &path, &SaveConfig::new(format)).unwrap();

            let loaded = load_model(&path).unwrap();
            assert_eq!(loaded.metadata.name, "m");
            let restored = loaded.to_model().unwrap();
            assert_eq!(restored.predict(&frame()).unwrap(), model().predict(&frame()).unwrap());
            assert_eq!(restored.positive_class(), Some("1"));
        }
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(load_model(&path), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(load_model("/nonexistent/model.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_load_rejects_broken_graph() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let mut snapshot = ModelSnapshot::from_model("m", &model());
        snapshot.nodes.remove(0);
        save_model(&snapshot, &path, &SaveConfig::default()).unwrap();
        assert!(load_model(&path).is_err());
    }
}
