//! Expression trees

use ndarray::{Array1, ArrayView2, Axis};

use super::ops::{BinaryOp, UnaryOp};

/// A candidate equation over the feature columns
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    /// Feature column index
    Var(usize),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn unary(op: UnaryOp, arg: Expr) -> Self {
        Self::Unary(op, Box::new(arg))
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate on every row of `x` (rows are samples)
    pub fn eval(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        match self {
            Self::Const(c) => Array1::from_elem(x.nrows(), *c),
            Self::Var(i) => {
                if *i < x.ncols() {
                    x.index_axis(Axis(1), *i).to_owned()
                } else {
                    Array1::from_elem(x.nrows(), f64::NAN)
                }
            }
            Self::Unary(op, arg) => arg.eval(x).mapv_into(|a| op.apply(a)),
            Self::Binary(op, lhs, rhs) => {
                let mut out = lhs.eval(x);
                let right = rhs.eval(x);
                out.zip_mut_with(&right, |a, &b| *a = op.apply(*a, b));
                out
            }
        }
    }

    /// Node count, with each constant weighing `constant_cost`
    pub fn complexity(&self, constant_cost: usize) -> usize {
        match self {
            Self::Const(_) => constant_cost,
            Self::Var(_) => 1,
            Self::Unary(_, arg) => 1 + arg.complexity(constant_cost),
            Self::Binary(_, lhs, rhs) => {
                1 + lhs.complexity(constant_cost) + rhs.complexity(constant_cost)
            }
        }
    }

    /// Longest root-to-leaf path, counting nodes
    pub fn depth(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => 1,
            Self::Unary(_, arg) => 1 + arg.depth(),
            Self::Binary(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => 1,
            Self::Unary(_, arg) => 1 + arg.size(),
            Self::Binary(_, lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }

    /// Whether some unary operator appears anywhere below itself
    pub fn has_nested_unary(&self) -> bool {
        fn walk(expr: &Expr, enclosing: &mut Vec<UnaryOp>) -> bool {
            match expr {
                Expr::Const(_) | Expr::Var(_) => false,
                Expr::Unary(op, arg) => {
                    if enclosing.contains(op) {
                        return true;
                    }
                    enclosing.push(*op);
                    let nested = walk(arg, enclosing);
                    enclosing.pop();
                    nested
                }
                Expr::Binary(_, lhs, rhs) => walk(lhs, enclosing) || walk(rhs, enclosing),
            }
        }
        walk(self, &mut Vec::new())
    }

    /// Node at a pre-order position
    pub fn get(&self, index: usize) -> Option<&Expr> {
        if index == 0 {
            return Some(self);
        }
        match self {
            Self::Const(_) | Self::Var(_) => None,
            Self::Unary(_, arg) => arg.get(index - 1),
            Self::Binary(_, lhs, rhs) => {
                let left = lhs.size();
                if index <= left {
                    lhs.get(index - 1)
                } else {
                    rhs.get(index - 1 - left)
                }
            }
        }
    }

    /// Mutable node at a pre-order position
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Expr> {
        if index == 0 {
            return Some(self);
        }
        match self {
            Self::Const(_) | Self::Var(_) => None,
            Self::Unary(_, arg) => arg.get_mut(index - 1),
            Self::Binary(_, lhs, rhs) => {
                let left = lhs.size();
                if index <= left {
                    lhs.get_mut(index - 1)
                } else {
                    rhs.get_mut(index - 1 - left)
                }
            }
        }
    }

    /// Mutable references to every constant, in pre-order
    pub fn constants_mut(&mut self) -> Vec<&mut f64> {
        let mut out = Vec::new();
        fn walk<'a>(expr: &'a mut Expr, out: &mut Vec<&'a mut f64>) {
            match expr {
                Expr::Const(c) => out.push(c),
                Expr::Var(_) => {}
                Expr::Unary(_, arg) => walk(arg, out),
                Expr::Binary(_, lhs, rhs) => {
                    walk(lhs, out);
                    walk(rhs, out);
                }
            }
        }
        walk(self, &mut out);
        out
    }

    /// Render with feature names; unknown indices fall back to `x{i}`
    pub fn format(&self, names: &[String]) -> String {
        match self {
            Self::Const(c) => format_constant(*c),
            Self::Var(i) => names.get(*i).cloned().unwrap_or_else(|| format!("x{i}")),
            Self::Unary(op, arg) => format!("{}({})", op.name(), arg.format(names)),
            Self::Binary(op, lhs, rhs) => {
                format!("({} {} {})", lhs.format(names), op.symbol(), rhs.format(names))
            }
        }
    }
}

fn format_constant(c: f64) -> String {
    if c.fract() == 0.0 && c.abs() < 1e15 {
        format!("{c:.1}")
    } else {
        format!("{c}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(&[]))
    }
}
