//! Aggregation errors.

use super::error_code::{self, SalesErrorCode};
use crate::types::DefinitionKind;

/// Errors raised while adding an amount to a running total.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error(
        "{file}: {kind} {code} total {current} + {amount} exceeds {digits} digits"
    )]
    AmountOverflow {
        kind: DefinitionKind,
        code: String,
        file: String,
        current: u64,
        amount: u64,
        digits: u32,
    },

    #[error("{file}: {kind} code {code} has no running total")]
    MissingTotal {
        kind: DefinitionKind,
        code: String,
        file: String,
    },
}

impl SalesErrorCode for AggregateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AmountOverflow { .. } => error_code::AMOUNT_OVERFLOW,
            Self::MissingTotal { .. } => error_code::MISSING_TOTAL,
        }
    }
}
