//! Symbolic rendering of a model

use super::graph::Model;
use super::kind::Kind;
use super::node::Node;
use super::op::Op;

/// Round `value` to `digits` significant digits and print it without noise
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let s = format!("{value:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// `w0·t0 + w1·t1 + … + c` with signs folded and unit weights dropped
fn affine(terms: &[(f64, String)], constant: f64, digits: usize) -> String {
    let mut out = String::new();
    for (weight, term) in terms {
        let magnitude = format_significant(weight.abs(), digits);
        let body = if magnitude == "1" {
            term.clone()
        } else {
            format!("{magnitude}*{term}")
        };
        if out.is_empty() {
            if *weight < 0.0 {
                out.push('-');
            }
        } else if *weight < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&body);
    }
    let c = format_significant(constant.abs(), digits);
    if c != "0" {
        if out.is_empty() {
            if constant < 0.0 {
                out.push('-');
            }
        } else if constant < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        out.push_str(&c);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Whether `expr` is a single call `name(...)` whose parentheses close at
/// the end of the string
fn is_call(expr: &str) -> bool {
    let Some(open) = expr.find('(') else {
        return false;
    };
    let name = &expr[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    let mut depth = 0usize;
    for (i, c) in expr[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return open + i + 1 == expr.len();
                }
            }
            _ => {}
        }
    }
    false
}

/// Wrap compound expressions in parentheses; calls are already atomic
fn atom(expr: &str) -> String {
    if expr.contains([' ', '+', '-', '*', '/']) && !is_call(expr) {
        format!("({expr})")
    } else {
        expr.to_string()
    }
}

impl Model {
    /// Human-readable algebraic form with `digits` significant digits.
    ///
    /// Input scaling is folded into the coefficients, categorical inputs
    /// render as `w[name]`, and classifiers are wrapped in `logreg(...)`.
    pub fn sympify(&self, digits: usize) -> String {
        let children = self.children();
        let mut exprs: Vec<String> = Vec::with_capacity(self.nodes.len());

        for (i, node) in self.nodes.iter().enumerate() {
            let arg = |k: usize| exprs[children[i][k]].clone();
            let expr = match node {
                Node::Numeric {
                    name,
                    center,
                    scale,
                    w,
                    b,
                } => {
                    let slope = w / scale;
                    let intercept = b - w * center / scale;
                    affine(&[(slope, name.clone())], intercept, digits)
                }
                Node::Categorical { name, bias, .. } => {
                    affine(&[(1.0, format!("w[{name}]"))], *bias, digits)
                }
                Node::Interaction { op, params } => match op {
                    Op::Add => affine(
                        &[(params[0], atom(&arg(0))), (params[1], atom(&arg(1)))],
                        params[2],
                        digits,
                    ),
                    Op::Multiply => format!("{}*{}", atom(&arg(0)), atom(&arg(1))),
                    Op::Gaussian2 => {
                        format!("exp(-({}^2 + {}^2))", atom(&arg(0)), atom(&arg(1)))
                    }
                    Op::Linear => affine(&[(params[0], atom(&arg(0)))], params[1], digits),
                    Op::Tanh => format!("tanh({})", arg(0)),
                    Op::Exp => format!("exp({})", arg(0)),
                    Op::Log => format!("log({})", arg(0)),
                    Op::Sqrt => format!("sqrt({})", arg(0)),
                    Op::Squared => format!("{}^2", atom(&arg(0))),
                    Op::Inverse => format!("1/{}", atom(&arg(0))),
                    Op::Gaussian1 => format!("exp(-{}^2)", atom(&arg(0))),
                },
                Node::Output { kind, w, b } => {
                    let inner = affine(&[(*w, atom(&arg(0)))], *b, digits);
                    match kind {
                        Kind::Classification => format!("logreg({inner})"),
                        Kind::Regression => inner,
                    }
                }
            };
            exprs.push(expr);
        }

        exprs.pop().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(0.123456, 3), "0.123");
        assert_eq!(format_significant(1234.7, 3), "1235");
        assert_eq!(format_significant(2.0, 3), "2");
        assert_eq!(format_significant(-0.00045678, 2), "-0.00046");
        assert_eq!(format_significant(0.0, 3), "0");
    }

    #[test]
    fn test_affine_signs() {
        assert_eq!(affine(&[(2.0, "x".into())], -1.5, 3), "2*x - 1.5");
        assert_eq!(affine(&[(-1.0, "x".into()), (0.5, "y".into())], 0.0, 3), "-x + 0.5*y");
        assert_eq!(affine(&[], 0.0, 3), "0");
    }

    #[test]
    fn test_atom() {
        assert_eq!(atom("x"), "x");
        assert_eq!(atom("2*x"), "(2*x)");
    }

    #[test]
    fn test_is_call() {
        assert!(is_call("exp(1.88*gene_a - 4.77)"));
        assert!(is_call("exp(-(gene_a^2 + gene_b^2))"));
        assert!(!is_call("exp(gene_a)*tanh(gene_b)"));
        assert!(!is_call("(gene_a + 1)"));
        assert!(!is_call("2*gene_a + 1"));
        assert!(!is_call("w[gender]"));
    }

    #[test]
    fn test_atom_leaves_calls_bare() {
        assert_eq!(atom("tanh(gene_a - 1)"), "tanh(gene_a - 1)");
        assert_eq!(atom("exp(gene_a)*tanh(gene_b)"), "(exp(gene_a)*tanh(gene_b))");
        assert_eq!(atom("gene_a - 1"), "(gene_a - 1)");
    }
}
