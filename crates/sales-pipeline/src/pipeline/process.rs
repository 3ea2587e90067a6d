//! The per-file step: validate one record file, then fold it into the totals.

use sales_core::errors::PipelineError;
use sales_core::types::{CodeNames, SalesTotals};

use crate::aggregate::Aggregator;
use crate::discovery::RecordFile;
use crate::records::{RecordValidator, SalesRecord};

/// Totals after one record was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRecord {
    pub record: SalesRecord,
    pub branch_total: u64,
    pub commodity_total: u64,
}

/// Validate `file` and add its amount to both totals.
///
/// Validation failures leave both totals untouched. Aggregation follows
/// `Aggregator::apply`: a commodity overflow keeps the branch commit.
pub fn process_one(
    file: &RecordFile,
    branch_names: &CodeNames,
    commodity_names: &CodeNames,
    branch_totals: &mut SalesTotals,
    commodity_totals: &mut SalesTotals,
    aggregator: &Aggregator,
) -> Result<ProcessedRecord, PipelineError> {
    let record = RecordValidator::new(branch_names, commodity_names).validate(file)?;
    let (branch_total, commodity_total) =
        aggregator.apply(&record, file.file_name(), branch_totals, commodity_totals)?;
    Ok(ProcessedRecord {
        record,
        branch_total,
        commodity_total,
    })
}
