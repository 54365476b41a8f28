//! Symbolic-regression model search for gene-expression phenotype tables.
//!
//! This crate provides:
//! - Loading and cleaning tab-separated expression tables ([`data`], [`infer`])
//! - Seeded stratified train/test splitting ([`split`])
//! - Mutual-information feature priors ([`prior`])
//! - A QLattice-style search over small interaction graphs ([`model`], [`search`])
//! - Results tables and best-model exports ([`eval`], [`report`], [`io`])
//! - A PySR-style evolutionary equation search ([`sr`])
//!
//! [`pipeline::run_pipeline`] ties the stages together for every configured
//! table; the `phenosr` binary exposes it on the command line.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod infer;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod prior;
pub mod report;
pub mod search;
pub mod split;
pub mod sr;

pub use error::{Error, Result};
