//! Crossline — moving-average crossover signal engine with an HTTP overlay
//! service for charting, CSV export and email alerts.

pub mod common;
pub mod config;
pub mod core;
pub mod export;
pub mod indicators;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod signals;
