//! Aggregation limits.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum decimal digits of any running total. Default: 10.
    pub total_digits: Option<u32>,
}

impl LimitsConfig {
    /// Returns the effective digit limit, defaulting to 10.
    pub fn effective_total_digits(&self) -> u32 {
        self.total_digits.unwrap_or(constants::DEFAULT_TOTAL_DIGITS)
    }

    /// Smallest total that no longer fits: `10^digits`.
    ///
    /// Digit limits are validated to at most 19, so the power cannot overflow;
    /// an out-of-range value saturates instead.
    pub fn total_bound(&self) -> u64 {
        10u64
            .checked_pow(self.effective_total_digits())
            .unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bound_is_ten_digits() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.total_bound(), 10_000_000_000);
    }

    #[test]
    fn oversized_digit_limit_saturates() {
        let limits = LimitsConfig {
            total_digits: Some(25),
        };
        assert_eq!(limits.total_bound(), u64::MAX);
    }
}
