//! Population-based equation search

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SrConfig;
use super::data::RegressionData;
use super::expr::Expr;
use super::hall_of_fame::HallOfFame;
use super::ops::{BinaryOp, UnaryOp};
use crate::{Error, Result};

/// Tries at building a valid random expression before giving up
const MAX_TRIES: usize = 50;

/// Probability that a fresh leaf is a constant
const CONSTANT_LEAF: f64 = 0.3;

#[derive(Debug, Clone)]
struct Member {
    expr: Expr,
    complexity: usize,
    loss: f64,
    birth: u64,
}

impl Member {
    fn fitness(&self, parsimony: f64) -> f64 {
        self.loss + parsimony * self.complexity as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    /// Scale one constant, occasionally flipping its sign
    Constant,
    /// Replace an operator with another of the same arity
    Operator,
    /// Point a variable at another feature
    Variable,
    /// Replace a subtree with a fresh one
    Regrow,
    /// Insert an operator above a node
    Insert,
    /// Replace an operator by one of its arguments
    Delete,
}

const MUTATIONS: [Mutation; 6] = [
    Mutation::Constant,
    Mutation::Operator,
    Mutation::Variable,
    Mutation::Regrow,
    Mutation::Insert,
    Mutation::Delete,
];

/// Seeded evolutionary regressor
#[derive(Debug, Clone)]
pub struct Regressor {
    config: SrConfig,
    rng: StdRng,
    births: u64,
}

impl Regressor {
    pub fn new(config: SrConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.random_state);
        Self {
            config,
            rng,
            births: 0,
        }
    }

    pub fn config(&self) -> &SrConfig {
        &self.config
    }

    /// Evolve equations predicting `data.y` from `data.x`
    pub fn fit(&mut self, data: &RegressionData) -> Result<HallOfFame> {
        self.check()?;
        if data.n_rows() == 0 {
            return Err(Error::EmptyDataset("regression needs at least one row".into()));
        }

        tracing::info!(
            rows = data.n_rows(),
            features = data.names.len(),
            loss = %self.config.loss,
            iterations = self.config.niterations,
            "starting equation search"
        );

        let mut hall = HallOfFame::new(data.names.clone());
        let mut populations: Vec<Vec<Member>> = (0..self.config.populations)
            .map(|_| self.seed_population(data, &mut hall))
            .collect();

        for iteration in 0..self.config.niterations {
            for population in populations.iter_mut() {
                for _ in 0..self.config.population_size {
                    self.step(population, data, &mut hall);
                }
            }
            self.migrate(&mut populations, data, &hall);

            tracing::debug!(
                iteration,
                equations = hall.len(),
                best_loss = hall.best().map(|e| e.loss),
                "iteration complete"
            );
        }

        tracing::info!(equations = hall.pareto_front().len(), "equation search finished");
        Ok(hall)
    }

    fn check(&self) -> Result<()> {
        let c = &self.config;
        if c.populations == 0 || c.population_size == 0 {
            return Err(Error::Config("populations and population_size must be > 0".into()));
        }
        if c.maxsize == 0 || c.maxdepth == 0 {
            return Err(Error::Config("maxsize and maxdepth must be > 0".into()));
        }
        if c.tournament_size == 0 {
            return Err(Error::Config("tournament_size must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&c.crossover_probability) {
            return Err(Error::Config(format!(
                "crossover_probability must be in [0, 1], got {}",
                c.crossover_probability
            )));
        }
        Ok(())
    }

    /// Complexity and loss, or `None` when the candidate breaks a constraint or blows up
    fn evaluate(&self, expr: &Expr, data: &RegressionData) -> Option<(usize, f64)> {
        let complexity = expr.complexity(self.config.complexity_of_constants);
        if complexity > self.config.maxsize
            || expr.depth() > self.config.maxdepth
            || expr.has_nested_unary()
        {
            return None;
        }
        let pred = expr.eval(data.x.view());
        if pred.iter().any(|p| !p.is_finite()) {
            return None;
        }
        let loss = self.config.loss.evaluate(data.y.view(), pred.view());
        loss.is_finite().then_some((complexity, loss))
    }

    fn admit(&mut self, expr: Expr, data: &RegressionData, hall: &mut HallOfFame) -> Option<Member> {
        let (complexity, loss) = self.evaluate(&expr, data)?;
        hall.consider(&expr, complexity, loss);
        self.births += 1;
        Some(Member {
            expr,
            complexity,
            loss,
            birth: self.births,
        })
    }

    fn seed_population(&mut self, data: &RegressionData, hall: &mut HallOfFame) -> Vec<Member> {
        let mut population = Vec::with_capacity(self.config.population_size);
        let mut tries = 0;
        while population.len() < self.config.population_size
            && tries < self.config.population_size * MAX_TRIES
        {
            tries += 1;
            let size = self.rng.random_range(1..=self.config.maxsize);
            let expr = self.grow(data.names.len(), size);
            if let Some(member) = self.admit(expr, data, hall) {
                population.push(member);
            }
        }
        population
    }

    /// One generation step: breed a child and let it replace the oldest member
    fn step(&mut self, population: &mut Vec<Member>, data: &RegressionData, hall: &mut HallOfFame) {
        let n_features = data.names.len();
        let children = if population.is_empty() {
            let size = self.rng.random_range(1..=self.config.maxsize);
            vec![self.grow(n_features, size)]
        } else if population.len() >= 2
            && self.rng.random::<f64>() < self.config.crossover_probability
        {
            let a = self.tournament(population).clone();
            let b = self.tournament(population).clone();
            let (left, right) = self.crossover(&a, &b);
            vec![left, right]
        } else {
            let parent = self.tournament(population).clone();
            self.mutate(&parent, n_features).into_iter().collect()
        };

        for child in children {
            if let Some(member) = self.admit(child, data, hall) {
                replace_oldest(population, member, self.config.population_size);
            }
        }
    }

    fn tournament<'p>(&mut self, population: &'p [Member]) -> &'p Expr {
        let parsimony = self.config.parsimony;
        let mut best = &population[self.rng.random_range(0..population.len())];
        for _ in 1..self.config.tournament_size.min(population.len()) {
            let challenger = &population[self.rng.random_range(0..population.len())];
            if challenger.fitness(parsimony) < best.fitness(parsimony) {
                best = challenger;
            }
        }
        &best.expr
    }

    /// Swap one random subtree between two parents
    fn crossover(&mut self, a: &Expr, b: &Expr) -> (Expr, Expr) {
        let i = self.rng.random_range(0..a.size());
        let j = self.rng.random_range(0..b.size());
        let (mut left, mut right) = (a.clone(), b.clone());
        if let (Some(from_a), Some(from_b)) = (a.get(i), b.get(j)) {
            if let Some(slot) = left.get_mut(i) {
                *slot = from_b.clone();
            }
            if let Some(slot) = right.get_mut(j) {
                *slot = from_a.clone();
            }
        }
        (left, right)
    }

    /// A mutated copy, or `None` when the chosen mutation has no target
    fn mutate(&mut self, parent: &Expr, n_features: usize) -> Option<Expr> {
        let mut child = parent.clone();
        match MUTATIONS[self.rng.random_range(0..MUTATIONS.len())] {
            Mutation::Constant => {
                let mut constants = child.constants_mut();
                if constants.is_empty() {
                    return None;
                }
                let at = self.rng.random_range(0..constants.len());
                let factor = 1.5f64.powf(self.rng.random_range(-1.0..1.0));
                let flip = self.rng.random::<f64>() < 0.1;
                let c = &mut *constants[at];
                *c *= if flip { -factor } else { factor };
            }
            Mutation::Operator => {
                let at = self.pick(&child, |e| matches!(e, Expr::Unary(..) | Expr::Binary(..)))?;
                let unary = self.random_unary();
                let binary = self.random_binary();
                match child.get_mut(at)? {
                    Expr::Unary(op, _) => *op = unary?,
                    Expr::Binary(op, _, _) => *op = binary?,
                    _ => return None,
                }
            }
            Mutation::Variable => {
                let at = self.pick(&child, |e| matches!(e, Expr::Var(_)))?;
                let feature = self.rng.random_range(0..n_features.max(1));
                *child.get_mut(at)? = Expr::Var(feature);
            }
            Mutation::Regrow => {
                let at = self.rng.random_range(0..child.size());
                let size = self.rng.random_range(1..=3);
                let fresh = self.grow(n_features, size);
                *child.get_mut(at)? = fresh;
            }
            Mutation::Insert => {
                let at = self.rng.random_range(0..child.size());
                let leaf = self.leaf(n_features);
                let unary = self.random_unary();
                let binary = self.random_binary();
                let leaf_first = self.rng.random::<bool>();
                let wrap_unary = match (unary, binary) {
                    (Some(_), Some(_)) => self.rng.random::<bool>(),
                    (Some(_), None) => true,
                    (None, Some(_)) => false,
                    (None, None) => return None,
                };
                let slot = child.get_mut(at)?;
                let node = std::mem::replace(slot, Expr::Const(0.0));
                *slot = match (wrap_unary, unary, binary) {
                    (true, Some(op), _) => Expr::unary(op, node),
                    (false, _, Some(op)) if leaf_first => Expr::binary(op, leaf, node),
                    (false, _, Some(op)) => Expr::binary(op, node, leaf),
                    _ => node,
                };
            }
            Mutation::Delete => {
                let at = self.pick(&child, |e| matches!(e, Expr::Unary(..) | Expr::Binary(..)))?;
                let keep_left = self.rng.random::<bool>();
                let slot = child.get_mut(at)?;
                let node = std::mem::replace(slot, Expr::Const(0.0));
                *slot = match node {
                    Expr::Unary(_, arg) => *arg,
                    Expr::Binary(_, lhs, _) if keep_left => *lhs,
                    Expr::Binary(_, _, rhs) => *rhs,
                    leaf => leaf,
                };
            }
        }
        Some(child)
    }

    /// Random pre-order position whose node satisfies `wanted`
    fn pick(&mut self, expr: &Expr, wanted: impl Fn(&Expr) -> bool) -> Option<usize> {
        let positions: Vec<usize> = (0..expr.size())
            .filter(|&i| expr.get(i).is_some_and(&wanted))
            .collect();
        if positions.is_empty() {
            return None;
        }
        Some(positions[self.rng.random_range(0..positions.len())])
    }

    fn random_unary(&mut self) -> Option<UnaryOp> {
        let ops = &self.config.unary_operators;
        (!ops.is_empty()).then(|| ops[self.rng.random_range(0..ops.len())])
    }

    fn random_binary(&mut self) -> Option<BinaryOp> {
        let ops = &self.config.binary_operators;
        (!ops.is_empty()).then(|| ops[self.rng.random_range(0..ops.len())])
    }

    fn leaf(&mut self, n_features: usize) -> Expr {
        if n_features == 0 || self.rng.random::<f64>() < CONSTANT_LEAF {
            Expr::Const(self.rng.random_range(-3.0..3.0))
        } else {
            Expr::Var(self.rng.random_range(0..n_features))
        }
    }

    /// Random tree with about `size` nodes
    fn grow(&mut self, n_features: usize, size: usize) -> Expr {
        if size <= 1 {
            return self.leaf(n_features);
        }
        let can_binary = size >= 3 && !self.config.binary_operators.is_empty();
        let can_unary = !self.config.unary_operators.is_empty();
        let use_binary = can_binary && (!can_unary || self.rng.random::<f64>() < 0.7);

        if use_binary {
            if let Some(op) = self.random_binary() {
                let left = self.rng.random_range(1..size - 1);
                let lhs = self.grow(n_features, left);
                let rhs = self.grow(n_features, size - 1 - left);
                return Expr::binary(op, lhs, rhs);
            }
        }
        match self.random_unary() {
            Some(op) => {
                let arg = self.grow(n_features, size - 1);
                Expr::unary(op, arg)
            }
            None => self.leaf(n_features),
        }
    }

    /// Replace the oldest member of every population with a hall-of-fame entry
    fn migrate(&mut self, populations: &mut [Vec<Member>], data: &RegressionData, hall: &HallOfFame) {
        if hall.is_empty() {
            return;
        }
        for population in populations.iter_mut() {
            let index = self.rng.random_range(0..hall.len());
            let Some(expr) = hall.member(index).cloned() else {
                continue;
            };
            if let Some((complexity, loss)) = self.evaluate(&expr, data) {
                self.births += 1;
                let member = Member {
                    expr,
                    complexity,
                    loss,
                    birth: self.births,
                };
                replace_oldest(population, member, self.config.population_size);
            }
        }
    }
}

fn replace_oldest(population: &mut Vec<Member>, member: Member, capacity: usize) {
    if population.len() < capacity {
        population.push(member);
        return;
    }
    if let Some(oldest) = population.iter_mut().min_by_key(|m| m.birth) {
        *oldest = member;
    }
}
