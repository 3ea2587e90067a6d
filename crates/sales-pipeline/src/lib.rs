//! sales-pipeline: the validation-and-aggregation pipeline.
//!
//! - Definitions: branch/commodity master list loading
//! - Discovery: record file listing, ordering and sequence checks
//! - Records: per-file shape, code and amount validation
//! - Aggregate: overflow-checked running totals
//! - Summary: `code,name,total` report files
//! - Pipeline: stage sequencing, fail-fast on the first error

pub mod aggregate;
pub mod definitions;
pub mod discovery;
pub mod pipeline;
pub mod records;
pub mod summary;

pub use aggregate::Aggregator;
pub use definitions::DefinitionLoader;
pub use discovery::{RecordFile, RecordFileDiscoverer};
pub use pipeline::{process_one, Pipeline, Stage};
pub use records::{RecordValidator, SalesRecord};
pub use summary::write_summary;
