//! Output configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::DefinitionKind;

/// Where summary files are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Summary directory. Default: the input directory.
    pub directory: Option<PathBuf>,
    /// Branch summary file name. Default: "branch.out".
    pub branch_summary: Option<String>,
    /// Commodity summary file name. Default: "commodity.out".
    pub commodity_summary: Option<String>,
}

impl OutputConfig {
    /// Returns the summary directory, falling back to `input_dir`.
    pub fn effective_directory<'a>(&'a self, input_dir: &'a Path) -> &'a Path {
        self.directory.as_deref().unwrap_or(input_dir)
    }

    /// Returns the summary file name for `kind`.
    pub fn summary_file(&self, kind: DefinitionKind) -> &str {
        match kind {
            DefinitionKind::Branch => self
                .branch_summary
                .as_deref()
                .unwrap_or(constants::DEFAULT_BRANCH_SUMMARY),
            DefinitionKind::Commodity => self
                .commodity_summary
                .as_deref()
                .unwrap_or(constants::DEFAULT_COMMODITY_SUMMARY),
        }
    }
}
