//! Forward evaluation over a frame

use ndarray::{Array1, Zip};

use super::graph::Model;
use super::kind::Kind;
use super::node::Node;
use super::op::Op;
use crate::data::{Column, Frame};
use crate::{Error, Result};

/// Input column bound to one input node
#[derive(Debug, Clone)]
pub(crate) enum Bound {
    /// Standardised numeric values `(x − center)/scale`
    Numeric(Array1<f64>),
    /// Index into the node's sorted category list per row
    Categorical(Vec<Option<usize>>),
    /// Not an input node
    None,
}

/// Logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Model {
    /// Bind every input node to its frame column
    pub(crate) fn bind(&self, frame: &Frame) -> Result<Vec<Bound>> {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Numeric {
                    name,
                    center,
                    scale,
                    ..
                } => {
                    let column = frame.require(name)?;
                    let values = column.as_numeric().ok_or_else(|| {
                        Error::Parse(format!("input '{name}' expects a numeric column"))
                    })?;
                    let (center, scale) = (*center, *scale);
                    Ok(Bound::Numeric(values.mapv(|x| (x - center) / scale)))
                }
                Node::Categorical { name, weights, .. } => {
                    let column = frame.require(name)?;
                    let levels: Vec<&String> = weights.keys().collect();
                    let lookup = |label: &str| {
                        levels.binary_search_by(|l| l.as_str().cmp(label)).ok()
                    };
                    let codes = match column {
                        Column::Categorical(values) => {
                            values.iter().map(|v| lookup(v.as_str())).collect()
                        }
                        Column::Numeric(_) => {
                            column.labels().iter().map(|v| lookup(v.as_str())).collect()
                        }
                    };
                    Ok(Bound::Categorical(codes))
                }
                _ => Ok(Bound::None),
            })
            .collect()
    }

    /// Activations of every node for bound inputs of `n` rows
    pub(crate) fn forward_bound(&self, bound: &[Bound], n: usize) -> Vec<Array1<f64>> {
        let children = self.children();
        let mut acts: Vec<Array1<f64>> = Vec::with_capacity(self.nodes.len());

        for (i, node) in self.nodes.iter().enumerate() {
            let act = match (node, &bound[i]) {
                (Node::Numeric { w, b, .. }, Bound::Numeric(z)) => z.mapv(|v| w * v + b),
                (Node::Categorical { bias, weights, .. }, Bound::Categorical(codes)) => {
                    let values: Vec<f64> = weights.values().copied().collect();
                    codes
                        .iter()
                        .map(|code| bias + code.map_or(0.0, |k| values[k]))
                        .collect()
                }
                (Node::Interaction { op, params }, _) => {
                    let a = &acts[children[i][0]];
                    match op {
                        Op::Add => {
                            let b = &acts[children[i][1]];
                            Zip::from(a)
                                .and(b)
                                .map_collect(|&x, &y| params[0] * x + params[1] * y + params[2])
                        }
                        Op::Multiply => a * &acts[children[i][1]],
                        Op::Gaussian2 => {
                            let b = &acts[children[i][1]];
                            Zip::from(a).and(b).map_collect(|&x, &y| (-(x * x + y * y)).exp())
                        }
                        Op::Linear => a.mapv(|x| params[0] * x + params[1]),
                        unary => a.mapv(|x| unary.unary(x)),
                    }
                }
                (Node::Output { kind, w, b }, _) => {
                    let a = &acts[children[i][0]];
                    match kind {
                        Kind::Classification => a.mapv(|x| sigmoid(w * x + b)),
                        Kind::Regression => a.mapv(|x| w * x + b),
                    }
                }
                _ => Array1::zeros(n),
            };
            acts.push(act);
        }
        acts
    }

    /// Activations of every node on `frame`
    pub fn activations(&self, frame: &Frame) -> Result<Vec<Array1<f64>>> {
        let bound = self.bind(frame)?;
        Ok(self.forward_bound(&bound, frame.n_rows()))
    }

    /// Predictions on `frame`: positive-class probabilities or values
    pub fn predict(&self, frame: &Frame) -> Result<Array1<f64>> {
        let mut acts = self.activations(frame)?;
        Ok(acts.pop().unwrap_or_else(|| Array1::zeros(frame.n_rows())))
    }
}
