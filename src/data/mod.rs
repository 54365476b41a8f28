//! Tabular data: loading, cleaning, and the typed in-memory frame

mod frame;
mod load;
mod preprocess;
mod table;

pub use frame::{Column, Frame};
pub use load::{load_table, load_table_with, read_table, Delimiter, NA_TOKENS};
pub use preprocess::{preprocess, CleanedData, PreprocessConfig};
pub use table::RawTable;
