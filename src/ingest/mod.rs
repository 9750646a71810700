//! Price-series ingestion from caller-supplied tabular data.

pub mod csv;

pub use csv::{read_prices, IngestError};
