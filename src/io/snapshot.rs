//! Serializable model state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Kind, Model, Node};
use crate::Result;

/// Descriptive fields stored alongside a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Run label the model was exported under
    pub name: String,
    pub kind: Kind,
    /// Version of the crate that wrote the snapshot
    pub version: String,
    pub created_at: DateTime<Utc>,
    /// Free-form extra fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, serde_json::Value>,
}

impl ModelMetadata {
    /// Metadata stamped with the current time and crate version
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            custom: BTreeMap::new(),
        }
    }

    /// Add a custom metadata field
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }
}

/// A model as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub metadata: ModelMetadata,
    /// Target column
    pub output_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_class: Option<String>,
    /// Symbolic form at export time
    pub expression: String,
    #[serde(default)]
    pub loss: Option<f64>,
    #[serde(default)]
    pub n_samples: usize,
    /// Post-order graph, output last
    pub nodes: Vec<Node>,
}

impl ModelSnapshot {
    /// Capture `model` under the label `name`
    pub fn from_model(name: impl Into<String>, model: &Model) -> Self {
        Self {
            metadata: ModelMetadata::new(name, model.kind()),
            output_name: model.output_name().to_string(),
            positive_class: model.positive_class().map(str::to_string),
            expression: model.sympify(3),
            loss: model.loss().is_finite().then(|| model.loss()),
            n_samples: model.n_samples(),
            nodes: model.nodes().to_vec(),
        }
    }

    /// Rebuild the model, re-checking the graph structure
    pub fn to_model(&self) -> Result<Model> {
        let mut model = Model::from_nodes(&self.output_name, self.metadata.kind, self.nodes.clone())?;
        if let Some(label) = &self.positive_class {
            model = model.with_positive_class(label.clone());
        }
        model.loss = self.loss;
        model.n_samples = self.n_samples;
        Ok(model)
    }
}
