//! Overflow-checked accumulation into running totals.

use sales_core::config::LimitsConfig;
use sales_core::constants::DEFAULT_TOTAL_DIGITS;
use sales_core::errors::AggregateError;
use sales_core::types::{DefinitionKind, SalesTotals};

use crate::records::SalesRecord;

/// Adds amounts to totals, refusing any total of `digits` or more digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    digits: u32,
    bound: u64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::with_digits(DEFAULT_TOTAL_DIGITS)
    }
}

impl Aggregator {
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            digits: limits.effective_total_digits(),
            bound: limits.total_bound(),
        }
    }

    pub fn with_digits(digits: u32) -> Self {
        Self::new(&LimitsConfig {
            total_digits: Some(digits),
        })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Largest total still accepted.
    pub fn max_total(&self) -> u64 {
        self.bound - 1
    }

    /// Add `amount` to `code`'s total. On overflow nothing is written.
    pub fn accumulate(
        &self,
        totals: &mut SalesTotals,
        kind: DefinitionKind,
        code: &str,
        amount: u64,
        file: &str,
    ) -> Result<u64, AggregateError> {
        let current = totals.get(code).ok_or_else(|| AggregateError::MissingTotal {
            kind,
            code: code.to_string(),
            file: file.to_string(),
        })?;

        let next = current
            .checked_add(amount)
            .filter(|&total| total < self.bound)
            .ok_or_else(|| AggregateError::AmountOverflow {
                kind,
                code: code.to_string(),
                file: file.to_string(),
                current,
                amount,
                digits: self.digits,
            })?;

        totals.set(code, next);
        Ok(next)
    }

    /// Apply one record: branch first, then commodity.
    ///
    /// The branch total is committed before the commodity total is checked,
    /// so a commodity overflow leaves the branch addition in place.
    pub fn apply(
        &self,
        record: &SalesRecord,
        file: &str,
        branch_totals: &mut SalesTotals,
        commodity_totals: &mut SalesTotals,
    ) -> Result<(u64, u64), AggregateError> {
        let branch_total = self.accumulate(
            branch_totals,
            DefinitionKind::Branch,
            &record.branch_code,
            record.amount,
            file,
        )?;
        let commodity_total = self.accumulate(
            commodity_totals,
            DefinitionKind::Commodity,
            &record.commodity_code,
            record.amount,
            file,
        )?;
        Ok((branch_total, commodity_total))
    }
}
