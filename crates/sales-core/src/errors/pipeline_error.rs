//! Pipeline errors: every subsystem error, classified for reporting.

use super::error_code::SalesErrorCode;
use super::error_kind::{ErrorKind, MessageContext};
use super::{
    AggregateError, ConfigError, DefinitionError, DiscoveryError, RecordError, SummaryError,
};

/// Errors that end a pipeline run. Every variant is terminal.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Aggregation error: {0}")]
    Aggregate(#[from] AggregateError),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid arguments: {0}")]
    Arguments(String),
}

impl PipelineError {
    /// Classify this error into the closed set of reportable kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Definition(DefinitionError::FileNotFound { .. }) => ErrorKind::FileNotFound,
            Self::Definition(DefinitionError::InvalidFormat { .. }) => {
                ErrorKind::InvalidDefinitionFormat
            }
            Self::Discovery(DiscoveryError::NonConsecutive { .. }) => {
                ErrorKind::NonConsecutiveFilenames
            }
            Self::Record(RecordError::InvalidFormat { .. }) => ErrorKind::InvalidRecordFormat,
            Self::Record(RecordError::UnknownBranchCode { .. }) => ErrorKind::UnknownBranchCode,
            Self::Record(RecordError::UnknownCommodityCode { .. }) => {
                ErrorKind::UnknownCommodityCode
            }
            Self::Aggregate(AggregateError::AmountOverflow { .. }) => ErrorKind::AmountOverflow,
            _ => ErrorKind::UnknownError,
        }
    }

    /// Context attached to the user message for this error.
    pub fn message_context(&self) -> MessageContext<'_> {
        match self {
            Self::Definition(e) => MessageContext::Definition(e.kind()),
            Self::Record(e) => MessageContext::File(e.file()),
            Self::Aggregate(AggregateError::AmountOverflow { digits, .. }) => {
                MessageContext::Digits(*digits)
            }
            _ => MessageContext::None,
        }
    }

    /// The single human-readable line reported for a failed run.
    pub fn user_message(&self) -> String {
        self.kind().message(self.message_context())
    }
}

impl SalesErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Definition(e) => e.error_code(),
            Self::Discovery(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Aggregate(e) => e.error_code(),
            Self::Summary(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Arguments(_) => super::error_code::CONFIG_ERROR,
        }
    }
}
