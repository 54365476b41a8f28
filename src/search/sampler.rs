//! Graph sampling from weighted inputs and interactions

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::Rng;

use super::space::FeatureSpace;
use crate::model::{Kind, Model, Node, Op};
use crate::prior::Priors;
use crate::Result;

/// Affinity never decays below this
const MIN_AFFINITY: f64 = 0.05;

/// Per-epoch decay applied before reinforcement
const DECAY: f64 = 0.9;

/// Models whose structure is reinforced after each epoch
const REINFORCE_TOP: usize = 5;

/// Learned preference for inputs and interactions
#[derive(Debug, Clone)]
pub(crate) struct Affinities {
    pub inputs: Vec<f64>,
    pub ops: [f64; Op::COUNT],
}

impl Affinities {
    pub fn new(n_inputs: usize) -> Self {
        Self {
            inputs: vec![1.0; n_inputs],
            ops: [1.0; Op::COUNT],
        }
    }

    /// Decay all affinities, then reward the structure of the ranked `models`
    pub fn reinforce(&mut self, models: &[Model], space: &FeatureSpace) {
        for a in self.inputs.iter_mut().chain(self.ops.iter_mut()) {
            *a = (*a * DECAY).max(MIN_AFFINITY);
        }
        for (rank, model) in models.iter().take(REINFORCE_TOP).enumerate() {
            let reward = 1.0 / (rank as f64 + 1.0);
            for node in model.nodes() {
                match node {
                    Node::Interaction { op, .. } => {
                        self.ops[op.index()] += reward;
                    }
                    _ => {
                        if let Some(idx) = node.feature().and_then(|f| space.position(f)) {
                            self.inputs[idx] += reward;
                        }
                    }
                }
            }
        }
    }
}

/// Draws random graphs for one epoch
pub(crate) struct Sampler<'a> {
    space: &'a FeatureSpace,
    inputs: Option<WeightedIndex<f64>>,
    op_weights: [f64; Op::COUNT],
    output_name: &'a str,
    kind: Kind,
    output_bias: f64,
    positive_class: Option<&'a str>,
}

impl<'a> Sampler<'a> {
    pub fn new(
        space: &'a FeatureSpace,
        priors: &Priors,
        affinities: &Affinities,
        output_name: &'a str,
        kind: Kind,
    ) -> Self {
        let weights: Vec<f64> = space
            .features()
            .iter()
            .zip(&affinities.inputs)
            .map(|(f, a)| priors.weight(&f.name) * a)
            .collect();
        Self {
            space,
            inputs: WeightedIndex::new(&weights).ok(),
            op_weights: affinities.ops,
            output_name,
            kind,
            output_bias: 0.0,
            positive_class: None,
        }
    }

    /// Initial output bias (logit of the base rate or the target mean)
    pub fn with_output_bias(mut self, bias: f64) -> Self {
        self.output_bias = bias;
        self
    }

    pub fn with_positive_class(mut self, positive_class: Option<&'a str>) -> Self {
        self.positive_class = positive_class;
        self
    }

    pub fn space(&self) -> &FeatureSpace {
        self.space
    }

    /// A fresh graph with at most `max_complexity` inputs and interactions
    pub fn sample(&self, rng: &mut StdRng, max_complexity: usize) -> Result<Model> {
        let mut nodes = Vec::with_capacity(max_complexity + 1);
        self.grow(rng, 0, max_complexity.max(1), &mut nodes);
        nodes.push(self.output_node());
        self.assemble(nodes)
    }

    /// Wrap post-order nodes (output included) into a model
    pub fn assemble(&self, nodes: Vec<Node>) -> Result<Model> {
        let model = Model::from_nodes(self.output_name, self.kind, nodes)?;
        Ok(match self.positive_class {
            Some(label) => model.with_positive_class(label),
            None => model,
        })
    }

    pub fn output_node(&self) -> Node {
        Node::Output {
            kind: self.kind,
            w: 1.0,
            b: self.output_bias,
        }
    }

    /// Append a random subtree of at most `budget` nodes; returns nodes used
    pub fn grow(&self, rng: &mut StdRng, depth: usize, budget: usize, out: &mut Vec<Node>) -> usize {
        let leaf_probability = if budget < 2 {
            1.0
        } else {
            (0.3 + 0.15 * depth as f64).min(1.0)
        };
        if rng.random::<f64>() < leaf_probability {
            out.push(self.input(rng));
            return 1;
        }

        let op = self.op(rng, budget >= 3);
        if op.arity() == 1 {
            let used = self.grow(rng, depth + 1, budget - 1, out);
            out.push(self.interaction(op, rng));
            used + 1
        } else {
            let left_budget = rng.random_range(1..=budget - 2);
            let left = self.grow(rng, depth + 1, left_budget, out);
            let right = self.grow(rng, depth + 1, budget - 1 - left, out);
            out.push(self.interaction(op, rng));
            left + right + 1
        }
    }

    /// Random input drawn by prior × affinity
    pub fn input(&self, rng: &mut StdRng) -> Node {
        let idx = match &self.inputs {
            Some(dist) => dist.sample(rng),
            None => rng.random_range(0..self.space.len()),
        };
        self.space.input_node(idx, rng)
    }

    /// Random interaction drawn by affinity; binary ops only if allowed
    pub fn op(&self, rng: &mut StdRng, allow_binary: bool) -> Op {
        self.op_matching(rng, |op| allow_binary || op.arity() == 1)
    }

    /// Random interaction among those satisfying `keep`
    pub fn op_matching(&self, rng: &mut StdRng, keep: impl Fn(Op) -> bool) -> Op {
        let candidates: Vec<(Op, f64)> = Op::ALL
            .iter()
            .zip(self.op_weights)
            .filter(|(op, _)| keep(**op))
            .map(|(op, w)| (*op, w))
            .collect();
        let weights: Vec<f64> = candidates.iter().map(|(_, w)| *w).collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => candidates[dist.sample(rng)].0,
            Err(_) => Op::Linear,
        }
    }

    /// Interaction node with freshly initialised parameters
    pub fn interaction(&self, op: Op, rng: &mut StdRng) -> Node {
        let params = match op {
            Op::Add => vec![rng.random_range(0.5..1.5), rng.random_range(0.5..1.5), 0.0],
            Op::Linear => vec![rng.random_range(0.5..1.5), 0.0],
            _ => Vec::new(),
        };
        Node::Interaction { op, params }
    }
}
