//! Record subsystem: reading and validating individual record files.

pub mod validator;

pub use validator::{parse_amount, read_lines, RecordValidator, SalesRecord};
