//! Definition file errors.

use std::path::PathBuf;

use super::error_code::{self, SalesErrorCode};
use crate::types::DefinitionKind;

/// Errors that can occur while loading a branch or commodity master list.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("{kind} definition file not found: {path}")]
    FileNotFound { kind: DefinitionKind, path: PathBuf },

    #[error("{kind} definition file {path} line {line}: {reason}")]
    InvalidFormat {
        kind: DefinitionKind,
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("IO error reading {kind} definitions {path}: {source}")]
    Io {
        kind: DefinitionKind,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DefinitionError {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::FileNotFound { kind, .. }
            | Self::InvalidFormat { kind, .. }
            | Self::Io { kind, .. } => *kind,
        }
    }
}

impl SalesErrorCode for DefinitionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::DEFINITION_NOT_FOUND,
            Self::InvalidFormat { .. } => error_code::DEFINITION_FORMAT,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
