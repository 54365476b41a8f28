//! Best equation per complexity

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::expr::Expr;
use crate::Result;

/// One Pareto-front entry
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub complexity: usize,
    pub loss: f64,
    /// Improvement over the next simpler front entry
    pub score: f64,
    pub expr: Expr,
    /// Rendered with feature names
    pub equation: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EquationRow {
    #[serde(rename = "Complexity")]
    complexity: usize,
    #[serde(rename = "Loss")]
    loss: f64,
    #[serde(rename = "Equation")]
    equation: String,
}

/// Lowest-loss expression seen at each complexity
#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    members: BTreeMap<usize, (Expr, f64)>,
    names: Vec<String>,
}

impl HallOfFame {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            members: BTreeMap::new(),
            names,
        }
    }

    /// Record a candidate; returns whether it became the best at its complexity
    pub fn consider(&mut self, expr: &Expr, complexity: usize, loss: f64) -> bool {
        if !loss.is_finite() {
            return false;
        }
        match self.members.get(&complexity) {
            Some((_, best)) if *best <= loss => false,
            _ => {
                self.members.insert(complexity, (expr.clone(), loss));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Stored expression by position in complexity order
    pub(crate) fn member(&self, index: usize) -> Option<&Expr> {
        self.members.values().nth(index).map(|(expr, _)| expr)
    }

    /// Entries whose loss beats every simpler entry, by increasing complexity
    pub fn pareto_front(&self) -> Vec<Equation> {
        let mut front: Vec<Equation> = Vec::new();
        for (&complexity, (expr, loss)) in &self.members {
            let score = match front.last() {
                Some(prev) if *loss >= prev.loss => continue,
                Some(prev) => {
                    let ratio = loss.max(f64::MIN_POSITIVE) / prev.loss.max(f64::MIN_POSITIVE);
                    -ratio.ln() / (complexity - prev.complexity) as f64
                }
                None => 0.0,
            };
            front.push(Equation {
                complexity,
                loss: *loss,
                score,
                expr: expr.clone(),
                equation: expr.format(&self.names),
            });
        }
        front
    }

    /// Highest-scoring front entry among those within 1.5x of the lowest loss
    pub fn best(&self) -> Option<Equation> {
        let front = self.pareto_front();
        let min_loss = front.iter().map(|e| e.loss).fold(f64::INFINITY, f64::min);
        front
            .into_iter()
            .filter(|e| e.loss <= 1.5 * min_loss)
            .fold(None, |best: Option<Equation>, e| match best {
                Some(b) if b.score >= e.score => Some(b),
                _ => Some(e),
            })
    }
}

/// Write the Pareto front as `Complexity,Loss,Equation`, replacing any existing file
pub fn write_equations(hall: &HallOfFame, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path.as_ref())?);
    let front = hall.pareto_front();
    if front.is_empty() {
        writer.write_record(["Complexity", "Loss", "Equation"])?;
    }
    for e in front {
        writer.serialize(EquationRow {
            complexity: e.complexity,
            loss: e.loss,
            equation: e.equation,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Read an equations CSV back as `(complexity, loss, equation)` rows
pub fn read_equations(path: impl AsRef<Path>) -> Result<Vec<(usize, f64, String)>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    reader
        .deserialize::<EquationRow>()
        .map(|row| -> Result<(usize, f64, String)> {
            let row = row?;
            Ok((row.complexity, row.loss, row.equation))
        })
        .collect()
}
