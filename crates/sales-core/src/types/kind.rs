//! Definition kinds: the two dimensions sales are aggregated along.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which master list a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    Branch,
    Commodity,
}

impl DefinitionKind {
    /// Both kinds, in pipeline order.
    pub const ALL: [DefinitionKind; 2] = [DefinitionKind::Branch, DefinitionKind::Commodity];

    /// Lowercase identifier used in logs and config keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Commodity => "commodity",
        }
    }

    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Branch => "Branch",
            Self::Commodity => "Commodity",
        }
    }

    /// Anchored regex every code of this kind must fully match.
    pub fn code_pattern(self) -> &'static str {
        match self {
            Self::Branch => constants::BRANCH_CODE_PATTERN,
            Self::Commodity => constants::COMMODITY_CODE_PATTERN,
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
