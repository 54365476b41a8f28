//! Symbolic model graphs
//!
//! A [`Model`] is a small expression graph: input nodes scale features,
//! interaction nodes combine them, and an output node applies a logistic
//! (classification) or linear (regression) link. Parameters are fitted by
//! full-batch Adam on reverse-mode gradients.

mod fit;
mod forward;
mod graph;
mod kind;
mod node;
mod op;
mod sympify;
mod target;


pub use fit::FitConfig;
pub use forward::sigmoid;
pub use graph::Model;
pub use kind::Kind;
pub use node::Node;
pub use op::Op;
pub use sympify::format_significant;
pub use target::{encode_target, EncodedTarget};
