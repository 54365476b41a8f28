//! Stratified train/test splitting
//!
//! Partitions rows so that both sides keep the class balance of a label
//! column. Shuffling uses a seeded `StdRng`: the same seed and the same input
//! always give the same partition.

mod error;
mod stratified;

#[cfg(test)]
mod tests;

pub use error::SplitError;
pub use stratified::{train_test_split, StratifiedSplit};
