//! QLattice-style model search
//!
//! The engine samples small expression graphs from a lattice of inputs and
//! interactions, fits each one, keeps a ranked pool, and reinforces the
//! inputs and interactions that appear in the best models. Sampling is
//! biased by feature priors and driven by a single seeded `StdRng`, so a
//! run is reproducible for a fixed seed and input.

mod config;
mod error;
mod mutate;
mod qlattice;
mod sampler;
mod select;
mod space;


pub use config::AutoRunSpec;
pub use error::SearchError;
pub use qlattice::QLattice;
pub use select::{rank_models, select_diverse};
