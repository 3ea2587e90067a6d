//! Record file validation: shape, known codes, well-formed amount.

use std::fs::File;
use std::io::{BufRead, BufReader};

use sales_core::constants::RECORD_LINE_COUNT;
use sales_core::errors::RecordError;
use sales_core::types::CodeNames;

use crate::discovery::RecordFile;

/// One validated record: which branch sold which commodity for how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub branch_code: String,
    pub commodity_code: String,
    pub amount: u64,
}

/// Validates record files against the loaded master lists.
pub struct RecordValidator<'a> {
    branch_names: &'a CodeNames,
    commodity_names: &'a CodeNames,
}

impl<'a> RecordValidator<'a> {
    pub fn new(branch_names: &'a CodeNames, commodity_names: &'a CodeNames) -> Self {
        Self {
            branch_names,
            commodity_names,
        }
    }

    /// Read and validate one record file.
    pub fn validate(&self, file: &RecordFile) -> Result<SalesRecord, RecordError> {
        let lines = read_lines(file)?;
        self.validate_lines(file.file_name(), lines)
    }

    /// Validate already-read lines. Checks run in order: line count, branch
    /// code, commodity code, amount; the first failure wins.
    pub fn validate_lines(
        &self,
        file_name: &str,
        lines: Vec<String>,
    ) -> Result<SalesRecord, RecordError> {
        let line_count = lines.len();
        let [branch_code, commodity_code, amount]: [String; RECORD_LINE_COUNT] =
            lines.try_into().map_err(|_| RecordError::InvalidFormat {
                file: file_name.to_string(),
                lines: line_count,
            })?;

        if !self.branch_names.contains_key(&branch_code) {
            return Err(RecordError::UnknownBranchCode {
                file: file_name.to_string(),
                code: branch_code,
            });
        }
        if !self.commodity_names.contains_key(&commodity_code) {
            return Err(RecordError::UnknownCommodityCode {
                file: file_name.to_string(),
                code: commodity_code,
            });
        }

        let amount = parse_amount(&amount).ok_or_else(|| RecordError::MalformedAmount {
            file: file_name.to_string(),
            value: amount.clone(),
        })?;

        Ok(SalesRecord {
            branch_code,
            commodity_code,
            amount,
        })
    }
}

/// Read every line of `file`. The handle is closed before returning.
pub fn read_lines(file: &RecordFile) -> Result<Vec<String>, RecordError> {
    let io_error = |source| RecordError::Io {
        file: file.file_name().to_string(),
        source,
    };
    let reader = BufReader::new(File::open(file.path()).map_err(io_error)?);
    reader.lines().collect::<Result<Vec<_>, _>>().map_err(io_error)
}

/// Parse a non-empty, all-ASCII-digit amount. No sign, whitespace or
/// separators. Values beyond `u64` are rejected.
pub fn parse_amount(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok()
}
