//! Core data types shared across the pipeline.

pub mod kind;
pub mod report;
pub mod tables;

pub use kind::DefinitionKind;
pub use report::{RunReport, SummaryReport};
pub use tables::{CodeNames, Definitions, SalesTotals};
