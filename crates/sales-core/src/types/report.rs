//! Run report returned by a successful pipeline run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::kind::DefinitionKind;

/// Outcome of one written summary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub kind: DefinitionKind,
    pub path: PathBuf,
    /// Number of lines written (one per defined code).
    pub codes: usize,
    pub total: u128,
}

/// Result of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub input_dir: PathBuf,
    /// Record files processed, in id order.
    pub record_files: usize,
    /// Sum of every processed amount.
    pub grand_total: u128,
    pub summaries: Vec<SummaryReport>,
}

impl RunReport {
    pub fn summary(&self, kind: DefinitionKind) -> Option<&SummaryReport> {
        self.summaries.iter().find(|s| s.kind == kind)
    }
}
