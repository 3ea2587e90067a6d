//! SalesErrorCode trait: stable machine-readable codes for every error enum.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable `Display` output.
pub trait SalesErrorCode {
    /// Returns the error code string (e.g., "AMOUNT_OVERFLOW").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DEFINITION_NOT_FOUND: &str = "DEFINITION_NOT_FOUND";
pub const DEFINITION_FORMAT: &str = "DEFINITION_FORMAT";
pub const RECORDS_NOT_CONSECUTIVE: &str = "RECORDS_NOT_CONSECUTIVE";
pub const RECORD_FORMAT: &str = "RECORD_FORMAT";
pub const UNKNOWN_BRANCH_CODE: &str = "UNKNOWN_BRANCH_CODE";
pub const UNKNOWN_COMMODITY_CODE: &str = "UNKNOWN_COMMODITY_CODE";
pub const MALFORMED_AMOUNT: &str = "MALFORMED_AMOUNT";
pub const AMOUNT_OVERFLOW: &str = "AMOUNT_OVERFLOW";
pub const IO_ERROR: &str = "IO_ERROR";
pub const MISSING_TOTAL: &str = "MISSING_TOTAL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
