//! SalesEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a pipeline run.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait SalesEventHandler: Send + Sync {
    // ---- Run Lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
    fn on_run_failed(&self, _event: &RunFailedEvent) {}
    fn on_stage_entered(&self, _event: &StageEnteredEvent) {}

    // ---- Inputs ----
    fn on_definitions_loaded(&self, _event: &DefinitionsLoadedEvent) {}
    fn on_records_discovered(&self, _event: &RecordsDiscoveredEvent) {}
    fn on_record_processed(&self, _event: &RecordProcessedEvent) {}

    // ---- Outputs ----
    fn on_summary_written(&self, _event: &SummaryWrittenEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpHandler;

impl SalesEventHandler for NoOpHandler {}
