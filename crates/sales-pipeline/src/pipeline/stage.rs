//! Pipeline stages, in execution order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    LoadBranchDefs,
    LoadCommodityDefs,
    DiscoverRecordFiles,
    ValidateSequence,
    ProcessRecords,
    WriteBranchSummary,
    WriteCommoditySummary,
    Done,
}

impl Stage {
    pub const ORDER: [Stage; 8] = [
        Stage::LoadBranchDefs,
        Stage::LoadCommodityDefs,
        Stage::DiscoverRecordFiles,
        Stage::ValidateSequence,
        Stage::ProcessRecords,
        Stage::WriteBranchSummary,
        Stage::WriteCommoditySummary,
        Stage::Done,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LoadBranchDefs => "load_branch_defs",
            Self::LoadCommodityDefs => "load_commodity_defs",
            Self::DiscoverRecordFiles => "discover_record_files",
            Self::ValidateSequence => "validate_sequence",
            Self::ProcessRecords => "process_records",
            Self::WriteBranchSummary => "write_branch_summary",
            Self::WriteCommoditySummary => "write_commodity_summary",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
