//! Model graph: nodes in post-order, the output node last

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::kind::Kind;
use super::node::Node;
use crate::eval::Criterion;
use crate::{Error, Result};

/// A fitted (or freshly sampled) model
///
/// Nodes are stored in post-order: every node's inputs precede it, and each
/// subtree occupies a contiguous slice ending at its root. The last node is
/// the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub(crate) output_name: String,
    pub(crate) kind: Kind,
    pub(crate) nodes: Vec<Node>,
    /// Label mapped to 1.0 for classification targets
    pub(crate) positive_class: Option<String>,
    /// Training loss after the last fit
    pub(crate) loss: Option<f64>,
    /// Training rows seen by the last fit
    pub(crate) n_samples: usize,
}

impl Model {
    /// Build a model from post-order nodes, checking the structure
    pub fn from_nodes(
        output_name: impl Into<String>,
        kind: Kind,
        nodes: Vec<Node>,
    ) -> Result<Self> {
        validate_structure(&nodes)?;
        Ok(Self {
            output_name: output_name.into(),
            kind,
            nodes,
            positive_class: None,
            loss: None,
            n_samples: 0,
        })
    }

    /// Set the label treated as the positive class
    pub fn with_positive_class(mut self, label: impl Into<String>) -> Self {
        self.positive_class = Some(label.into());
        self
    }

    /// Target column name
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Classification or regression
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Nodes in post-order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Positive-class label for classifiers
    pub fn positive_class(&self) -> Option<&str> {
        self.positive_class.as_deref()
    }

    /// Training loss from the last fit (`NaN` if never fitted)
    pub fn loss(&self) -> f64 {
        self.loss.unwrap_or(f64::NAN)
    }

    /// Rows used in the last fit
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of inputs and interactions
    pub fn complexity(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Number of trainable parameters
    pub fn n_parameters(&self) -> usize {
        self.nodes.iter().map(Node::n_params).sum()
    }

    /// Distinct input features in order of first use
    pub fn features(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.nodes
            .iter()
            .filter_map(Node::feature)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Ranking score under `criterion` using the training loss
    pub fn score(&self, criterion: Criterion) -> f64 {
        criterion.score(self.kind, self.loss(), self.n_samples, self.n_parameters())
    }

    /// Bayesian information criterion on the training data
    pub fn bic(&self) -> f64 {
        self.score(Criterion::Bic)
    }

    /// Akaike information criterion on the training data
    pub fn aic(&self) -> f64 {
        self.score(Criterion::Aic)
    }

    /// Child node indices of every node
    pub fn children(&self) -> Vec<Vec<usize>> {
        children_of(&self.nodes)
    }

    /// Index of the first node of the subtree rooted at `root`
    pub fn subtree_start(&self, root: usize) -> usize {
        subtree_start(&self.nodes, root)
    }

    /// Depth of the graph below the output node
    pub fn depth(&self) -> usize {
        let children = self.children();
        let mut depth = vec![0usize; self.nodes.len()];
        for i in 0..self.nodes.len() {
            depth[i] = children[i].iter().map(|&c| depth[c] + 1).max().unwrap_or(0);
        }
        depth.last().copied().unwrap_or(0).saturating_sub(1)
    }

    /// Structural key ignoring parameters; commutative inputs are ordered
    pub fn signature(&self) -> String {
        let children = self.children();
        let mut sigs: Vec<String> = Vec::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            let mut parts: Vec<String> = children[i].iter().map(|&c| sigs[c].clone()).collect();
            let sig = match node {
                Node::Numeric { name, .. } => format!("num:{name}"),
                Node::Categorical { name, .. } => format!("cat:{name}"),
                Node::Interaction { op, .. } => {
                    if op.is_commutative() {
                        parts.sort();
                    }
                    format!("{}({})", op.name(), parts.join(","))
                }
                Node::Output { kind, .. } => format!("{kind}({})", parts.join(",")),
            };
            sigs.push(sig);
        }
        sigs.pop().unwrap_or_default()
    }

    /// Flattened parameters of every node, in node order
    pub fn params(&self) -> Vec<f64> {
        self.nodes.iter().flat_map(Node::params).collect()
    }

    /// Overwrite every parameter from a flat slice in [`Model::params`] order
    pub fn set_params(&mut self, values: &[f64]) {
        let mut offset = 0;
        for node in &mut self.nodes {
            let n = node.n_params();
            node.set_params(&values[offset..offset + n]);
            offset += n;
        }
    }

    /// Replace the subtree rooted at `root` with `replacement` (post-order)
    pub fn replace_subtree(&self, root: usize, replacement: Vec<Node>) -> Result<Model> {
        let start = self.subtree_start(root);
        let mut nodes = Vec::with_capacity(self.nodes.len() + replacement.len());
        nodes.extend_from_slice(&self.nodes[..start]);
        nodes.extend(replacement);
        nodes.extend_from_slice(&self.nodes[root + 1..]);
        validate_structure(&nodes)?;
        Ok(Model {
            output_name: self.output_name.clone(),
            kind: self.kind,
            nodes,
            positive_class: self.positive_class.clone(),
            loss: None,
            n_samples: 0,
        })
    }
}

/// Check arities line up and exactly one output closes the graph
fn validate_structure(nodes: &[Node]) -> Result<()> {
    let mut stack = 0usize;
    for (i, node) in nodes.iter().enumerate() {
        let arity = node.arity();
        if stack < arity {
            return Err(Error::Serialization(format!(
                "node {i} ({}) needs {arity} inputs, {stack} available",
                node.label()
            )));
        }
        if matches!(node, Node::Output { .. }) && i + 1 != nodes.len() {
            return Err(Error::Serialization(format!(
                "output node at position {i} is not last"
            )));
        }
        if let Node::Interaction { op, params } = node {
            if params.len() != op.n_params() {
                return Err(Error::Serialization(format!(
                    "node {i} ({op}) has {} parameters, expected {}",
                    params.len(),
                    op.n_params()
                )));
            }
        }
        stack = stack - arity + 1;
    }
    match nodes.last() {
        Some(Node::Output { .. }) if stack == 1 => Ok(()),
        _ => Err(Error::Serialization(
            "graph must end with a single output node".to_string(),
        )),
    }
}

pub(crate) fn children_of(nodes: &[Node]) -> Vec<Vec<usize>> {
    let mut stack: Vec<usize> = Vec::new();
    let mut children = Vec::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        let at = stack.len() - node.arity().min(stack.len());
        children.push(stack.split_off(at));
        stack.push(i);
    }
    children
}

pub(crate) fn subtree_start(nodes: &[Node], root: usize) -> usize {
    let mut need = 1usize;
    let mut i = root + 1;
    while need > 0 && i > 0 {
        i -= 1;
        need = need - 1 + nodes[i].arity();
    }
    i
}
