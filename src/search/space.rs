//! Input feature space derived from the training partition

use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

use super::error::SearchError;
use crate::data::{Column, Frame};
use crate::infer::SemanticTypes;
use crate::model::Node;

/// How an input is encoded
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InputKind {
    /// Standardised with training mean and standard deviation
    Numeric { center: f64, scale: f64 },
    /// One weight per training category
    Categorical { levels: Vec<String> },
}

/// One candidate input
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FeatureInfo {
    pub name: String,
    pub kind: InputKind,
}

/// Every candidate input, in frame order
#[derive(Debug, Clone, Default)]
pub(crate) struct FeatureSpace {
    features: Vec<FeatureInfo>,
}

impl FeatureSpace {
    /// Collect inputs from every non-target column of `frame`.
    ///
    /// Columns tagged "c" (or holding labels) become categorical inputs;
    /// the rest are numeric.
    pub fn from_frame(
        frame: &Frame,
        target: &str,
        stypes: &SemanticTypes,
    ) -> Result<Self, SearchError> {
        let mut features = Vec::new();
        for (name, column) in frame.iter().filter(|(name, _)| *name != target) {
            let categorical = match stypes.get(name).map(String::as_str) {
                Some("c") => true,
                Some("f") => {
                    if column.is_categorical() {
                        return Err(SearchError::NonNumericFeature(name.to_string()));
                    }
                    false
                }
                Some(other) => {
                    return Err(SearchError::UnknownStype {
                        column: name.to_string(),
                        stype: other.to_string(),
                    })
                }
                None => column.is_categorical(),
            };
            let kind = if categorical {
                let levels: BTreeSet<String> = column.labels().into_iter().collect();
                InputKind::Categorical {
                    levels: levels.into_iter().collect(),
                }
            } else {
                let (center, scale) = standardisation(column);
                InputKind::Numeric { center, scale }
            };
            features.push(FeatureInfo {
                name: name.to_string(),
                kind,
            });
        }
        if features.is_empty() {
            return Err(SearchError::NoFeatures);
        }
        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn features(&self) -> &[FeatureInfo] {
        &self.features
    }

    /// Index of the input named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name == name)
    }

    /// Fresh input node for feature `idx` with small random weights
    pub fn input_node(&self, idx: usize, rng: &mut StdRng) -> Node {
        let feature = &self.features[idx];
        match &feature.kind {
            InputKind::Numeric { center, scale } => Node::Numeric {
                name: feature.name.clone(),
                center: *center,
                scale: *scale,
                w: rng.random_range(-1.0..1.0),
                b: 0.0,
            },
            InputKind::Categorical { levels } => {
                let weights: BTreeMap<String, f64> = levels
                    .iter()
                    .map(|l| (l.clone(), rng.random_range(-0.5..0.5)))
                    .collect();
                Node::Categorical {
                    name: feature.name.clone(),
                    bias: 0.0,
                    weights,
                }
            }
        }
    }
}

fn standardisation(column: &Column) -> (f64, f64) {
    let Some(values) = column.as_numeric() else {
        return (0.0, 1.0);
    };
    let center = values.mean().unwrap_or(0.0);
    let scale = values.std(0.0);
    if scale.is_finite() && scale > 1e-12 {
        (center, scale)
    } else {
        (center, 1.0)
    }
}
