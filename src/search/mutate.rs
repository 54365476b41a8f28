//! Structural and parametric mutations of pooled models

use rand::rngs::StdRng;
use rand::Rng;

use super::sampler::Sampler;
use crate::model::{Model, Node};

/// Attempts before falling back to a fresh sample
const MAX_ATTEMPTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    /// Jitter every parameter
    Perturb,
    /// Replace one input with another feature
    SwapInput,
    /// Replace one interaction with another of the same arity
    SwapOp,
    /// Regrow a random subtree
    Regrow,
    /// Insert a unary interaction above a node
    Wrap,
}

const MUTATIONS: [Mutation; 5] = [
    Mutation::Perturb,
    Mutation::SwapInput,
    Mutation::SwapOp,
    Mutation::Regrow,
    Mutation::Wrap,
];

/// A mutated copy of `parent` within `max_complexity`, or a fresh sample
pub(crate) fn mutate(
    parent: &Model,
    sampler: &Sampler<'_>,
    rng: &mut StdRng,
    max_complexity: usize,
) -> crate::Result<Model> {
    for _ in 0..MAX_ATTEMPTS {
        let mutation = MUTATIONS[rng.random_range(0..MUTATIONS.len())];
        if let Some(child) = apply(mutation, parent, sampler, rng, max_complexity) {
            if child.complexity() <= max_complexity {
                return Ok(child);
            }
        }
    }
    sampler.sample(rng, max_complexity)
}

fn apply(
    mutation: Mutation,
    parent: &Model,
    sampler: &Sampler<'_>,
    rng: &mut StdRng,
    max_complexity: usize,
) -> Option<Model> {
    let nodes = parent.nodes();
    let body = nodes.len() - 1;
    match mutation {
        Mutation::Perturb => {
            let params: Vec<f64> = parent
                .params()
                .iter()
                .map(|p| p + rng.random_range(-0.5..0.5))
                .collect();
            let mut child = rebuild(sampler, nodes.to_vec())?;
            child.set_params(&params);
            Some(child)
        }
        Mutation::SwapInput => {
            let inputs: Vec<usize> = (0..body).filter(|&i| nodes[i].is_input()).collect();
            let at = inputs[rng.random_range(0..inputs.len())];
            let mut replaced = nodes.to_vec();
            replaced[at] = sampler.input(rng);
            if replaced[at].feature() == nodes[at].feature() {
                return None;
            }
            rebuild(sampler, replaced)
        }
        Mutation::SwapOp => {
            let interactions: Vec<usize> = (0..body).filter(|&i| !nodes[i].is_input()).collect();
            if interactions.is_empty() {
                return None;
            }
            let at = interactions[rng.random_range(0..interactions.len())];
            let Node::Interaction { op, .. } = &nodes[at] else {
                return None;
            };
            let current = *op;
            let new_op = sampler.op_matching(rng, |o| o.arity() == current.arity() && o != current);
            if new_op == current || new_op.arity() != current.arity() {
                return None;
            }
            let mut replaced = nodes.to_vec();
            replaced[at] = sampler.interaction(new_op, rng);
            rebuild(sampler, replaced)
        }
        Mutation::Regrow => {
            let root = rng.random_range(0..body);
            let start = parent.subtree_start(root);
            let removed = root + 1 - start;
            let budget = max_complexity.saturating_sub(parent.complexity() - removed).max(1);
            let mut subtree = Vec::new();
            sampler.grow(rng, 0, budget, &mut subtree);
            parent.replace_subtree(root, subtree).ok()
        }
        Mutation::Wrap => {
            if parent.complexity() >= max_complexity {
                return None;
            }
            let at = rng.random_range(0..body);
            let op = sampler.op(rng, false);
            let mut replaced = nodes.to_vec();
            replaced.insert(at + 1, sampler.interaction(op, rng));
            rebuild(sampler, replaced)
        }
    }
}

/// Fresh, unfitted model over `nodes` with the sampler's target settings
fn rebuild(sampler: &Sampler<'_>, nodes: Vec<Node>) -> Option<Model> {
    sampler.assemble(nodes).ok()
}
