//! Tabular export of derived signals.

pub mod csv;

pub use csv::{signal_table_csv, ExportError};
