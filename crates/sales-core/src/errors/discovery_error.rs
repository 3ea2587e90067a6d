//! Record file discovery errors.

use std::path::PathBuf;

use super::error_code::{self, SalesErrorCode};

/// Errors that can occur while listing and ordering record files.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Record files are not consecutive: {previous} is followed by {next}")]
    NonConsecutive { previous: String, next: String },

    #[error("IO error listing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SalesErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonConsecutive { .. } => error_code::RECORDS_NOT_CONSECUTIVE,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
