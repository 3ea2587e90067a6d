//! Record file validation errors.

use super::error_code::{self, SalesErrorCode};

/// Errors that reject a single record file. `file` is the file name only.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{file}: expected 3 lines, found {lines}")]
    InvalidFormat { file: String, lines: usize },

    #[error("{file}: unknown branch code {code:?}")]
    UnknownBranchCode { file: String, code: String },

    #[error("{file}: unknown commodity code {code:?}")]
    UnknownCommodityCode { file: String, code: String },

    #[error("{file}: malformed amount {value:?}")]
    MalformedAmount { file: String, value: String },

    #[error("IO error reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },
}

impl RecordError {
    pub fn file(&self) -> &str {
        match self {
            Self::InvalidFormat { file, .. }
            | Self::UnknownBranchCode { file, .. }
            | Self::UnknownCommodityCode { file, .. }
            | Self::MalformedAmount { file, .. }
            | Self::Io { file, .. } => file,
        }
    }
}

impl SalesErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => error_code::RECORD_FORMAT,
            Self::UnknownBranchCode { .. } => error_code::UNKNOWN_BRANCH_CODE,
            Self::UnknownCommodityCode { .. } => error_code::UNKNOWN_COMMODITY_CODE,
            Self::MalformedAmount { .. } => error_code::MALFORMED_AMOUNT,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
