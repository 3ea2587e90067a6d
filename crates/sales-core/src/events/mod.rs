//! Event system.
//! Trait with no-op defaults, synchronous calls from the pipeline loop.

pub mod handler;
pub mod types;

pub use handler::{NoOpHandler, SalesEventHandler};
pub use types::*;
