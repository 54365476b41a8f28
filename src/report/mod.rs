//! Results table and best-model exports
//!
//! Every run writes `{name}_table.csv` with one row per ranked model. The
//! best model is exported as a self-contained HTML summary, an SVG signal
//! plot of its graph and a JSON snapshot.

mod charts;
mod export;
mod metrics;
mod signal;
mod summary;
mod table;

pub use export::{export_best, ExportPaths};
pub use metrics::PartitionMetrics;
pub use signal::{node_correlations, signal_svg, write_signal};
pub use summary::{summary_html, write_summary};
pub use table::{build_reports, read_results_table, table_path, write_results_table, ModelReport};
