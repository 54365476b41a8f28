//! Expression operators

use serde::{Deserialize, Serialize};

/// Two-argument operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "^")]
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    /// Apply to two values; invalid domains yield non-finite results
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl std::str::FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s.trim())
            .ok_or_else(|| format!("unknown binary operator '{s}' (expected + - * / ^)"))
    }
}

/// One-argument operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    Square,
    Cube,
    Exp,
    Log,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [UnaryOp::Square, UnaryOp::Cube, UnaryOp::Exp, UnaryOp::Log];

    /// Apply to one value; `log` of a non-positive value is NaN
    pub fn apply(self, a: f64) -> f64 {
        match self {
            Self::Square => a * a,
            Self::Cube => a * a * a,
            Self::Exp => a.exp(),
            Self::Log => {
                if a > 0.0 {
                    a.ln()
                } else {
                    f64::NAN
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Exp => "exp",
            Self::Log => "log",
        }
    }
}

impl std::str::FromStr for UnaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown unary operator '{s}' (expected square, cube, exp or log)"))
    }
}
