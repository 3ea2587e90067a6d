//! Shared constants for the sales aggregation pipeline.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default branch definition file name.
pub const DEFAULT_BRANCH_DEFINITIONS: &str = "branch.lst";

/// Default commodity definition file name.
pub const DEFAULT_COMMODITY_DEFINITIONS: &str = "commodity.lst";

/// Default branch summary file name.
pub const DEFAULT_BRANCH_SUMMARY: &str = "branch.out";

/// Default commodity summary file name.
pub const DEFAULT_COMMODITY_SUMMARY: &str = "commodity.out";

/// Default record file extension (without the dot).
pub const DEFAULT_RECORD_EXTENSION: &str = "rcd";

/// Default number of digits in a record file's numeric id.
pub const DEFAULT_RECORD_ID_WIDTH: usize = 8;

/// Default maximum number of decimal digits a running total may have.
pub const DEFAULT_TOTAL_DIGITS: u32 = 10;

/// Largest digit limit whose bound `10^digits` still fits in a `u64`.
pub const MAX_TOTAL_DIGITS: u32 = 19;

/// Largest record id width that always parses into a `u64`.
pub const MAX_RECORD_ID_WIDTH: usize = 18;

/// Project config file looked up in the input directory.
pub const PROJECT_CONFIG_FILE: &str = "sales.toml";

/// Field delimiter in definition and summary files.
pub const FIELD_DELIMITER: char = ',';

/// Number of lines in a well-formed record file.
pub const RECORD_LINE_COUNT: usize = 3;

/// Branch code pattern: exactly three ASCII digits.
pub const BRANCH_CODE_PATTERN: &str = r"^[0-9]{3}$";

/// Commodity code pattern: exactly eight ASCII alphanumerics.
pub const COMMODITY_CODE_PATTERN: &str = r"^[A-Za-z0-9]{8}$";
