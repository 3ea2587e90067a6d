//! sales-core: shared foundation for the sales aggregation pipeline.
//!
//! - Types: definition kinds, code tables, running totals, run reports
//! - Errors: one `thiserror` enum per subsystem, aggregated by `PipelineError`
//! - Config: layered TOML configuration (`sales.toml` + `SALES_*` env + CLI)
//! - Events: `SalesEventHandler` with no-op defaults
//! - Tracing: `init_tracing` reading `SALES_LOG`

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

pub use errors::{ErrorKind, PipelineError};
pub use types::{CodeNames, DefinitionKind, Definitions, RunReport, SalesTotals};
