//! Graph nodes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::kind::Kind;
use super::op::Op;

/// One node of a model graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Numeric input: `w·(x − center)/scale + b`
    Numeric {
        name: String,
        center: f64,
        scale: f64,
        w: f64,
        b: f64,
    },
    /// Categorical input: `bias + weights[category]`; unseen categories add 0
    Categorical {
        name: String,
        bias: f64,
        weights: BTreeMap<String, f64>,
    },
    /// Interaction over the preceding one or two subtrees
    Interaction { op: Op, params: Vec<f64> },
    /// Final node: logistic or linear link over one subtree
    Output { kind: Kind, w: f64, b: f64 },
}

impl Node {
    /// Number of incoming subtrees
    pub fn arity(&self) -> usize {
        match self {
            Node::Numeric { .. } | Node::Categorical { .. } => 0,
            Node::Interaction { op, .. } => op.arity(),
            Node::Output { .. } => 1,
        }
    }

    /// Number of trainable parameters
    pub fn n_params(&self) -> usize {
        match self {
            Node::Numeric { .. } | Node::Output { .. } => 2,
            Node::Categorical { weights, .. } => 1 + weights.len(),
            Node::Interaction { op, .. } => op.n_params(),
        }
    }

    /// Input feature name, for input nodes
    pub fn feature(&self) -> Option<&str> {
        match self {
            Node::Numeric { name, .. } | Node::Categorical { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this is an input node
    pub fn is_input(&self) -> bool {
        self.arity() == 0
    }

    /// Parameters in a fixed order
    pub fn params(&self) -> Vec<f64> {
        match self {
            Node::Numeric { w, b, .. } | Node::Output { w, b, .. } => vec![*w, *b],
            Node::Categorical { bias, weights, .. } => {
                std::iter::once(*bias).chain(weights.values().copied()).collect()
            }
            Node::Interaction { params, .. } => params.clone(),
        }
    }

    /// Overwrite parameters from a slice in [`Node::params`] order
    pub fn set_params(&mut self, values: &[f64]) {
        match self {
            Node::Numeric { w, b, .. } | Node::Output { w, b, .. } => {
                *w = values[0];
                *b = values[1];
            }
            Node::Categorical { bias, weights, .. } => {
                *bias = values[0];
                for (weight, value) in weights.values_mut().zip(&values[1..]) {
                    *weight = *value;
                }
            }
            Node::Interaction { params, .. } => params.copy_from_slice(values),
        }
    }

    /// Short label for plots
    pub fn label(&self) -> String {
        match self {
            Node::Numeric { name, .. } | Node::Categorical { name, .. } => name.clone(),
            Node::Interaction { op, .. } => op.name().to_string(),
            Node::Output { kind, .. } => match kind {
                Kind::Classification => "out (logistic)".to_string(),
                Kind::Regression => "out (linear)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_round_trip_categorical() {
        let mut node = Node::Categorical {
            name: "gender".into(),
            bias: 0.1,
            weights: [("F".to_string(), 0.2), ("M".to_string(), -0.3)]
                .into_iter()
                .collect(),
        };
        assert_eq!(node.n_params(), 3);
        assert_eq!(node.params(), vec![0.1, 0.2, -0.3]);
        node.set_params(&[1.0, 2.0, 3.0]);
        assert_eq!(node.params(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_arity() {
        let add = Node::Interaction {
            op: Op::Add,
            params: vec![1.0, 1.0, 0.0],
        };
        assert_eq!(add.arity(), 2);
        assert_eq!(add.n_params(), 3);
        assert!(!add.is_input());
        let out = Node::Output {
            kind: Kind::Classification,
            w: 1.0,
            b: 0.0,
        };
        assert_eq!(out.arity(), 1);
        assert_eq!(out.label(), "out (logistic)");
    }

    #[test]
    fn test_serde_tagged() {
        let node = Node::Numeric {
            name: "gene_a".into(),
            center: 0.0,
            scale: 1.0,
            w: 0.5,
            b: 0.0,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "numeric");
        assert_eq!(json["name"], "gene_a");
    }
}
