//! End-to-end runs
//!
//! [`run_pipeline`] drives every configured table through load, preprocess,
//! split, prior estimation, model search, the results table and the export of
//! the best model. [`run_regression`] is the equation-search counterpart.

mod regress;
mod run;


pub use regress::{run_regression, RegressionSummary};
pub use run::{run_one, run_pipeline, RunSummary};
