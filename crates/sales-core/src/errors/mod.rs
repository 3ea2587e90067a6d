//! Error handling for the sales pipeline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregate_error;
pub mod config_error;
pub mod definition_error;
pub mod discovery_error;
pub mod error_code;
pub mod error_kind;
pub mod pipeline_error;
pub mod record_error;
pub mod summary_error;

pub use aggregate_error::AggregateError;
pub use config_error::ConfigError;
pub use definition_error::DefinitionError;
pub use discovery_error::DiscoveryError;
pub use error_code::SalesErrorCode;
pub use error_kind::{ErrorKind, MessageContext};
pub use pipeline_error::PipelineError;
pub use record_error::RecordError;
pub use summary_error::SummaryError;
