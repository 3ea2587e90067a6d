//! Aggregation subsystem.

pub mod aggregator;

pub use aggregator::Aggregator;
