//! Model persistence
//!
//! Fitted models are stored as a [`ModelSnapshot`]: metadata plus the full
//! node list with parameters. JSON and YAML are supported, chosen by file
//! extension on load.

mod format;
mod load;
mod save;
mod snapshot;

pub use format::{ModelFormat, SaveConfig};
pub use load::load_model;
pub use save::save_model;
pub use snapshot::{ModelMetadata, ModelSnapshot};
