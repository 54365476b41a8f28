//! Interaction operators

use serde::{Deserialize, Serialize};

/// Guard against division by zero and log of zero
pub const EPS: f64 = 1e-9;

/// Interactions cap `exp` inputs to keep activations finite
const EXP_CLAMP: f64 = 50.0;

/// Interaction operator applied to one or two incoming activations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// `w0·a + w1·b + c`
    Add,
    /// `a·b`
    Multiply,
    /// `exp(−(a² + b²))`
    Gaussian2,
    /// `w·a + c`
    Linear,
    /// `tanh(a)`
    Tanh,
    /// `exp(a)`
    Exp,
    /// `ln(|a| + ε)`
    Log,
    /// `sqrt(|a| + ε)`
    Sqrt,
    /// `a²`
    Squared,
    /// `1 / a`
    Inverse,
    /// `exp(−a²)`
    Gaussian1,
}

impl Op {
    /// Number of operators
    pub const COUNT: usize = 11;

    /// Every operator, in a fixed order
    pub const ALL: [Op; Op::COUNT] = [
        Op::Add,
        Op::Multiply,
        Op::Gaussian2,
        Op::Linear,
        Op::Tanh,
        Op::Exp,
        Op::Log,
        Op::Sqrt,
        Op::Squared,
        Op::Inverse,
        Op::Gaussian1,
    ];

    /// Position in [`Op::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of incoming activations
    pub fn arity(self) -> usize {
        match self {
            Op::Add | Op::Multiply | Op::Gaussian2 => 2,
            _ => 1,
        }
    }

    /// Number of trainable parameters
    pub fn n_params(self) -> usize {
        match self {
            Op::Add => 3,
            Op::Linear => 2,
            _ => 0,
        }
    }

    /// Whether swapping the two inputs leaves the result unchanged (structurally)
    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Multiply | Op::Gaussian2)
    }

    /// Short name
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Multiply => "multiply",
            Op::Gaussian2 => "gaussian2",
            Op::Linear => "linear",
            Op::Tanh => "tanh",
            Op::Exp => "exp",
            Op::Log => "log",
            Op::Sqrt => "sqrt",
            Op::Squared => "squared",
            Op::Inverse => "inverse",
            Op::Gaussian1 => "gaussian1",
        }
    }

    /// Apply a unary operator to one value
    pub fn unary(self, a: f64) -> f64 {
        match self {
            Op::Tanh => a.tanh(),
            Op::Exp => a.clamp(-EXP_CLAMP, EXP_CLAMP).exp(),
            Op::Log => (a.abs() + EPS).ln(),
            Op::Sqrt => (a.abs() + EPS).sqrt(),
            Op::Squared => a * a,
            Op::Inverse => 1.0 / guard(a),
            Op::Gaussian1 => (-a * a).exp(),
            _ => a,
        }
    }

    /// Derivative of a unary operator at `a`, given its output `out`
    pub fn unary_grad(self, a: f64, out: f64) -> f64 {
        match self {
            Op::Tanh => 1.0 - out * out,
            Op::Exp => {
                if a.abs() > EXP_CLAMP {
                    0.0
                } else {
                    out
                }
            }
            Op::Log => a.signum() / (a.abs() + EPS),
            Op::Sqrt => a.signum() / (2.0 * out),
            Op::Squared => 2.0 * a,
            Op::Inverse => -out * out,
            Op::Gaussian1 => -2.0 * a * out,
            _ => 1.0,
        }
    }
}

/// Push values away from zero so `1/a` stays finite
fn guard(a: f64) -> f64 {
    if a.abs() < EPS {
        if a.is_sign_negative() {
            -EPS
        } else {
            EPS
        }
    } else {
        a
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
