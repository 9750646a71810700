//! Moving-average crossover signal derivation.

pub mod engine;

pub use engine::{net_position, signal_table, SignalEngine, SignalError};
