//! Code tables: names and running totals keyed by code, in definition order.

use indexmap::IndexMap;
use serde::Serialize;

use super::kind::DefinitionKind;

/// `code -> name`, iterated in the order codes were first defined.
pub type CodeNames = IndexMap<String, String>;

/// `code -> running total`.
///
/// Every defined code has an entry from load time on. Entries are never
/// removed and totals only grow during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesTotals {
    totals: IndexMap<String, u64>,
}

impl SalesTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `code` to zero, inserting it if absent.
    pub fn reset(&mut self, code: impl Into<String>) {
        self.totals.insert(code.into(), 0);
    }

    pub fn get(&self, code: &str) -> Option<u64> {
        self.totals.get(code).copied()
    }

    /// Overwrite the total for a known code. Returns `false` for unknown codes,
    /// which are never inserted here.
    pub fn set(&mut self, code: &str, total: u64) -> bool {
        match self.totals.get_mut(code) {
            Some(slot) => {
                *slot = total;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(code, total)| (code.as_str(), *total))
    }

    /// Sum of all totals. Widened so the sum itself can never overflow.
    pub fn grand_total(&self) -> u128 {
        self.totals.values().map(|&t| u128::from(t)).sum()
    }
}

/// One loaded master list: names plus zero-initialized totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definitions {
    pub kind: DefinitionKind,
    pub names: CodeNames,
    pub totals: SalesTotals,
}

impl Definitions {
    pub fn new(kind: DefinitionKind) -> Self {
        Self {
            kind,
            names: CodeNames::new(),
            totals: SalesTotals::new(),
        }
    }

    /// Record a definition. A repeated code keeps its original position,
    /// takes the new name and has its total reset. Returns `true` when an
    /// earlier definition was overwritten.
    pub fn define(&mut self, code: &str, name: &str) -> bool {
        let replaced = self
            .names
            .insert(code.to_string(), name.to_string())
            .is_some();
        self.totals.reset(code);
        replaced
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefinition_resets_total_and_keeps_position() {
        let mut defs = Definitions::new(DefinitionKind::Branch);
        assert!(!defs.define("001", "Tokyo"));
        assert!(!defs.define("002", "Osaka"));
        assert!(defs.totals.set("001", 500));

        assert!(defs.define("001", "Sapporo"));

        let codes: Vec<&str> = defs.names.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["001", "002"]);
        assert_eq!(defs.names["001"], "Sapporo");
        assert_eq!(defs.totals.get("001"), Some(0));
    }

    #[test]
    fn set_ignores_unknown_codes() {
        let mut totals = SalesTotals::new();
        totals.reset("001");
        assert!(!totals.set("999", 10));
        assert_eq!(totals.get("999"), None);
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn grand_total_does_not_overflow() {
        let mut totals = SalesTotals::new();
        totals.reset("a");
        totals.reset("b");
        totals.set("a", u64::MAX);
        totals.set("b", u64::MAX);
        assert_eq!(totals.grand_total(), u128::from(u64::MAX) * 2);
    }
}
