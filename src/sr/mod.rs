//! Evolutionary symbolic regression
//!
//! A small PySR-style regressor: populations of expression trees over the
//! configured operators evolve by tournament selection, mutation and
//! crossover. The best equation found at every complexity is kept in a
//! [`HallOfFame`], written out as an equations CSV.

mod config;
mod data;
mod evolve;
mod expr;
mod hall_of_fame;
mod loss;
mod ops;

#[cfg(test)]
mod tests;

pub use config::SrConfig;
pub use data::{prepare_regression, RegressionData};
pub use evolve::Regressor;
pub use expr::Expr;
pub use hall_of_fame::{read_equations, write_equations, Equation, HallOfFame};
pub use loss::LossKind;
pub use ops::{BinaryOp, UnaryOp};
