//! Parameter fitting: reverse-mode gradients and Adam

use ndarray::{Array1, ArrayView1, Zip};

use super::forward::Bound;
use super::graph::Model;
use super::kind::Kind;
use super::node::Node;
use super::op::Op;
use crate::data::Frame;
use crate::eval::{binary_cross_entropy, squared_error};
use crate::Result;

/// Gradient-descent settings for one model fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    /// Number of full-batch Adam steps
    pub steps: usize,
    /// Adam learning rate
    pub learning_rate: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            learning_rate: 0.05,
        }
    }
}

/// Adam optimizer over a flat parameter vector
///
/// θ_t = θ_{t-1} − lr · m̂_t / (√v̂_t + ε)
#[derive(Debug, Clone)]
struct Adam {
    lr: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    t: i32,
    m: Vec<f64>,
    v: Vec<f64>,
}

impl Adam {
    fn new(lr: f64, n_params: usize) -> Self {
        Self {
            lr,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            t: 0,
            m: vec![0.0; n_params],
            v: vec![0.0; n_params],
        }
    }

    fn step(&mut self, params: &mut [f64], grads: &[f64]) {
        self.t += 1;
        let bias1 = 1.0 - self.beta1.powi(self.t);
        let bias2 = 1.0 - self.beta2.powi(self.t);
        for (i, (p, &g)) in params.iter_mut().zip(grads).enumerate() {
            if !g.is_finite() {
                continue;
            }
            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * g;
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * g * g;
            let m_hat = self.m[i] / bias1;
            let v_hat = self.v[i] / bias2;
            *p -= self.lr * m_hat / (v_hat.sqrt() + self.epsilon);
        }
    }
}

impl Model {
    /// Fit parameters to `frame` with targets `y`; returns the final training loss
    pub fn fit(&mut self, frame: &Frame, y: ArrayView1<'_, f64>, config: &FitConfig) -> Result<f64> {
        let bound = self.bind(frame)?;
        Ok(self.fit_bound(&bound, y, config))
    }

    /// Loss of the current parameters on `frame`
    pub fn evaluate_loss(&self, frame: &Frame, y: ArrayView1<'_, f64>) -> Result<f64> {
        let pred = self.predict(frame)?;
        Ok(self.loss_of(y, pred.view()))
    }

    pub(crate) fn loss_of(&self, y: ArrayView1<'_, f64>, pred: ArrayView1<'_, f64>) -> f64 {
        match self.kind {
            Kind::Classification => binary_cross_entropy(y, pred),
            Kind::Regression => squared_error(y, pred),
        }
    }

    pub(crate) fn fit_bound(&mut self, bound: &[Bound], y: ArrayView1<'_, f64>, config: &FitConfig) -> f64 {
        let n = y.len();
        let mut params = self.params();
        let mut adam = Adam::new(config.learning_rate, params.len());

        for _ in 0..config.steps {
            let acts = self.forward_bound(bound, n);
            let grads = self.gradients(bound, &acts, y);
            adam.step(&mut params, &grads);
            self.set_params(&params);
        }

        let acts = self.forward_bound(bound, n);
        let loss = acts
            .last()
            .map_or(f64::NAN, |pred| self.loss_of(y, pred.view()));
        self.loss = Some(loss);
        self.n_samples = n;
        loss
    }

    /// Gradient of the training loss with respect to every parameter
    pub(crate) fn gradients(&self, bound: &[Bound], acts: &[Array1<f64>], y: ArrayView1<'_, f64>) -> Vec<f64> {
        let n = y.len().max(1) as f64;
        let children = self.children();

        let mut offsets = Vec::with_capacity(self.nodes.len());
        let mut total = 0;
        for node in &self.nodes {
            offsets.push(total);
            total += node.n_params();
        }
        let mut grads = vec![0.0; total];
        let mut upstream: Vec<Option<Array1<f64>>> = vec![None; self.nodes.len()];

        for i in (0..self.nodes.len()).rev() {
            let off = offsets[i];
            match &self.nodes[i] {
                Node::Output { kind, w, .. } => {
                    let out = &acts[i];
                    let a = &acts[children[i][0]];
                    // dL/dz for the pre-activation z = w·a + b
                    let dz = match kind {
                        Kind::Classification => (out - &y) / n,
                        Kind::Regression => (out - &y) * (2.0 / n),
                    };
                    grads[off] = (&dz * a).sum();
                    grads[off + 1] = dz.sum();
                    send(&mut upstream, children[i][0], dz * *w);
                }
                Node::Interaction { op, params } => {
                    let Some(g) = upstream[i].take() else { continue };
                    let a = &acts[children[i][0]];
                    match op {
                        Op::Add => {
                            let b = &acts[children[i][1]];
                            grads[off] = (&g * a).sum();
                            grads[off + 1] = (&g * b).sum();
                            grads[off + 2] = g.sum();
                            send(&mut upstream, children[i][0], &g * params[0]);
                            send(&mut upstream, children[i][1], &g * params[1]);
                        }
                        Op::Multiply => {
                            let b = &acts[children[i][1]];
                            send(&mut upstream, children[i][0], &g * b);
                            send(&mut upstream, children[i][1], &g * a);
                        }
                        Op::Gaussian2 => {
                            let b = &acts[children[i][1]];
                            let out = &acts[i];
                            let ga = Zip::from(&g).and(out).and(a).map_collect(|&g, &o, &x| -2.0 * g * o * x);
                            let gb = Zip::from(&g).and(out).and(b).map_collect(|&g, &o, &x| -2.0 * g * o * x);
                            send(&mut upstream, children[i][0], ga);
                            send(&mut upstream, children[i][1], gb);
                        }
                        Op::Linear => {
                            grads[off] = (&g * a).sum();
                            grads[off + 1] = g.sum();
                            send(&mut upstream, children[i][0], &g * params[0]);
                        }
                        unary => {
                            let out = &acts[i];
                            let ga = Zip::from(&g)
                                .and(a)
                                .and(out)
                                .map_collect(|&g, &x, &o| g * unary.unary_grad(x, o));
                            send(&mut upstream, children[i][0], ga);
                        }
                    }
                }
                Node::Numeric { .. } => {
                    let Some(g) = upstream[i].take() else { continue };
                    if let Bound::Numeric(z) = &bound[i] {
                        grads[off] = (&g * z).sum();
                        grads[off + 1] = g.sum();
                    }
                }
                Node::Categorical { .. } => {
                    let Some(g) = upstream[i].take() else { continue };
                    grads[off] = g.sum();
                    if let Bound::Categorical(codes) = &bound[i] {
                        for (code, gv) in codes.iter().zip(g.iter()) {
                            if let Some(k) = code {
                                grads[off + 1 + k] += gv;
                            }
                        }
                    }
                }
            }
        }

        grads
    }
}

/// Accumulate a gradient into a child's upstream slot
fn send(upstream: &mut [Option<Array1<f64>>], child: usize, g: Array1<f64>) {
    if let Some(existing) = upstream[child].as_mut() {
        *existing += &g;
    } else {
        upstream[child] = Some(g);
    }
}
