//! Summary output errors.

use std::path::PathBuf;

use super::error_code::{self, SalesErrorCode};
use crate::types::DefinitionKind;

/// Errors that can occur while writing a summary file.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("IO error writing {kind} summary {path}: {source}")]
    Io {
        kind: DefinitionKind,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SalesErrorCode for SummaryError {
    fn error_code(&self) -> &'static str {
        error_code::IO_ERROR
    }
}
