//! Input configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::DefinitionKind;

/// Where and how input files are found.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Branch definition file name. Default: "branch.lst".
    pub branch_definitions: Option<String>,
    /// Commodity definition file name. Default: "commodity.lst".
    pub commodity_definitions: Option<String>,
    /// Record file extension without the dot. Default: "rcd".
    pub record_extension: Option<String>,
    /// Digits in a record file's numeric id. Default: 8.
    pub record_id_width: Option<usize>,
}

impl InputConfig {
    /// Returns the definition file name for `kind`.
    pub fn definition_file(&self, kind: DefinitionKind) -> &str {
        match kind {
            DefinitionKind::Branch => self
                .branch_definitions
                .as_deref()
                .unwrap_or(constants::DEFAULT_BRANCH_DEFINITIONS),
            DefinitionKind::Commodity => self
                .commodity_definitions
                .as_deref()
                .unwrap_or(constants::DEFAULT_COMMODITY_DEFINITIONS),
        }
    }

    /// Returns the effective record extension, defaulting to "rcd".
    pub fn effective_record_extension(&self) -> &str {
        self.record_extension
            .as_deref()
            .unwrap_or(constants::DEFAULT_RECORD_EXTENSION)
    }

    /// Returns the effective record id width, defaulting to 8.
    pub fn effective_record_id_width(&self) -> usize {
        self.record_id_width
            .unwrap_or(constants::DEFAULT_RECORD_ID_WIDTH)
    }
}
