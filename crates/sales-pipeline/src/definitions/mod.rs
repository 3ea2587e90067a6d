//! Definition subsystem: branch and commodity master lists.

pub mod loader;

pub use loader::{load_definitions, split_fields, DefinitionLoader};
