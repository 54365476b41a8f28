//! Configuration validation
//!
//! Checks pipeline specifications for out-of-range values before any run
//! starts.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
