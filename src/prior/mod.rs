//! Feature prior estimation
//!
//! Priors bias the model search toward features that carry information
//! about the target. Every feature is scored by mutual information with the
//! target, ranked, and mapped to a weight in `[floor, 1]`.

mod mutual_info;
mod priors;


pub use mutual_info::{equal_frequency_bins, mutual_information, N_BINS};
pub use priors::{estimate_priors, Priors};
