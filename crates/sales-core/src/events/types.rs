//! Event payloads emitted by the pipeline.

use std::path::PathBuf;

use crate::errors::ErrorKind;
use crate::types::DefinitionKind;

#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub input_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StageEnteredEvent {
    pub stage: &'static str,
}

#[derive(Debug, Clone)]
pub struct DefinitionsLoadedEvent {
    pub kind: DefinitionKind,
    pub path: PathBuf,
    pub codes: usize,
}

#[derive(Debug, Clone)]
pub struct RecordsDiscoveredEvent {
    pub count: usize,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordProcessedEvent {
    pub file: String,
    pub branch_code: String,
    pub commodity_code: String,
    pub amount: u64,
    pub branch_total: u64,
    pub commodity_total: u64,
}

#[derive(Debug, Clone)]
pub struct SummaryWrittenEvent {
    pub kind: DefinitionKind,
    pub path: PathBuf,
    pub lines: usize,
}

#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub record_files: usize,
    pub grand_total: u128,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct RunFailedEvent {
    /// Stage that was running when the error occurred.
    pub stage: &'static str,
    pub kind: ErrorKind,
    pub error_code: String,
    pub message: String,
}
