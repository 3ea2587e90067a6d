//! Pipeline runner: sequences every stage and stops at the first error.

use std::path::Path;
use std::time::Instant;

use sales_core::config::SalesConfig;
use sales_core::errors::{PipelineError, SalesErrorCode};
use sales_core::events::{
    DefinitionsLoadedEvent, RecordProcessedEvent, RecordsDiscoveredEvent, RunCompleteEvent,
    RunFailedEvent, RunStartedEvent, SalesEventHandler, StageEnteredEvent, SummaryWrittenEvent,
};
use sales_core::types::{DefinitionKind, Definitions, RunReport, SummaryReport};
use tracing::span::EnteredSpan;

use super::process::process_one;
use super::stage::Stage;
use crate::aggregate::Aggregator;
use crate::definitions::DefinitionLoader;
use crate::discovery::{verify_consecutive, RecordFileDiscoverer};
use crate::summary::write_summary;

/// A configured pipeline. Compiles its patterns once; `run` may be called
/// any number of times.
pub struct Pipeline {
    config: SalesConfig,
    branch_loader: DefinitionLoader,
    commodity_loader: DefinitionLoader,
    discoverer: RecordFileDiscoverer,
    aggregator: Aggregator,
}

impl Pipeline {
    pub fn new(config: SalesConfig) -> Result<Self, PipelineError> {
        SalesConfig::validate(&config)?;
        Ok(Self {
            branch_loader: DefinitionLoader::new(DefinitionKind::Branch),
            commodity_loader: DefinitionLoader::new(DefinitionKind::Commodity),
            discoverer: RecordFileDiscoverer::from_config(&config.input),
            aggregator: Aggregator::new(&config.limits),
            config,
        })
    }

    pub fn with_defaults() -> Result<Self, PipelineError> {
        Self::new(SalesConfig::default())
    }

    pub fn config(&self) -> &SalesConfig {
        &self.config
    }

    /// Run every stage over `input_dir`.
    ///
    /// On error no later stage runs: in particular no summary file is written
    /// once record processing has failed.
    pub fn run(
        &self,
        input_dir: &Path,
        handler: &dyn SalesEventHandler,
    ) -> Result<RunReport, PipelineError> {
        let started = Instant::now();
        let _run = tracing::info_span!("sales_run", input_dir = %input_dir.display()).entered();
        handler.on_run_started(&RunStartedEvent {
            input_dir: input_dir.to_path_buf(),
        });

        let mut stage = Stage::LoadBranchDefs;
        let result = self.execute(input_dir, handler, &mut stage);

        match &result {
            Ok(report) => {
                let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                tracing::info!(
                    record_files = report.record_files,
                    grand_total = %report.grand_total,
                    duration_ms,
                    "run complete"
                );
                handler.on_run_complete(&RunCompleteEvent {
                    record_files: report.record_files,
                    grand_total: report.grand_total,
                    duration_ms,
                });
            }
            Err(error) => {
                tracing::error!(
                    stage = %stage,
                    code = error.error_code(),
                    %error,
                    "run failed"
                );
                handler.on_run_failed(&RunFailedEvent {
                    stage: stage.name(),
                    kind: error.kind(),
                    error_code: error.error_code().to_string(),
                    message: error.user_message(),
                });
            }
        }
        result
    }

    fn execute(
        &self,
        input_dir: &Path,
        handler: &dyn SalesEventHandler,
        stage: &mut Stage,
    ) -> Result<RunReport, PipelineError> {
        let mut branch = {
            let _span = enter(stage, Stage::LoadBranchDefs, handler);
            self.load(&self.branch_loader, input_dir, handler)?
        };
        let mut commodity = {
            let _span = enter(stage, Stage::LoadCommodityDefs, handler);
            self.load(&self.commodity_loader, input_dir, handler)?
        };

        let files = {
            let _span = enter(stage, Stage::DiscoverRecordFiles, handler);
            let files = self.discoverer.list(input_dir)?;
            tracing::info!(record_files = files.len(), "record files discovered");
            handler.on_records_discovered(&RecordsDiscoveredEvent {
                count: files.len(),
                first: files.first().map(|f| f.file_name().to_string()),
                last: files.last().map(|f| f.file_name().to_string()),
            });
            files
        };

        {
            let _span = enter(stage, Stage::ValidateSequence, handler);
            verify_consecutive(&files)?;
        }

        let mut grand_total: u128 = 0;
        {
            let _span = enter(stage, Stage::ProcessRecords, handler);
            for file in &files {
                let processed = process_one(
                    file,
                    &branch.names,
                    &commodity.names,
                    &mut branch.totals,
                    &mut commodity.totals,
                    &self.aggregator,
                )?;
                grand_total += u128::from(processed.record.amount);
                tracing::debug!(
                    record_file = file.file_name(),
                    amount = processed.record.amount,
                    branch_total = processed.branch_total,
                    commodity_total = processed.commodity_total,
                    "record processed"
                );
                handler.on_record_processed(&RecordProcessedEvent {
                    file: file.file_name().to_string(),
                    branch_code: processed.record.branch_code,
                    commodity_code: processed.record.commodity_code,
                    amount: processed.record.amount,
                    branch_total: processed.branch_total,
                    commodity_total: processed.commodity_total,
                });
            }
        }

        let output_dir = self.config.output.effective_directory(input_dir);
        let branch_summary = {
            let _span = enter(stage, Stage::WriteBranchSummary, handler);
            self.write(output_dir, &branch, handler)?
        };
        let commodity_summary = {
            let _span = enter(stage, Stage::WriteCommoditySummary, handler);
            self.write(output_dir, &commodity, handler)?
        };

        let _span = enter(stage, Stage::Done, handler);
        Ok(RunReport {
            input_dir: input_dir.to_path_buf(),
            record_files: files.len(),
            grand_total,
            summaries: vec![branch_summary, commodity_summary],
        })
    }

    fn load(
        &self,
        loader: &DefinitionLoader,
        input_dir: &Path,
        handler: &dyn SalesEventHandler,
    ) -> Result<Definitions, PipelineError> {
        let kind = loader.kind();
        let file_name = self.config.input.definition_file(kind);
        let definitions = loader.load(input_dir, file_name)?;
        handler.on_definitions_loaded(&DefinitionsLoadedEvent {
            kind,
            path: input_dir.join(file_name),
            codes: definitions.len(),
        });
        Ok(definitions)
    }

    fn write(
        &self,
        output_dir: &Path,
        definitions: &Definitions,
        handler: &dyn SalesEventHandler,
    ) -> Result<SummaryReport, PipelineError> {
        let kind = definitions.kind;
        let report = write_summary(
            output_dir,
            self.config.output.summary_file(kind),
            kind,
            &definitions.names,
            &definitions.totals,
        )?;
        handler.on_summary_written(&SummaryWrittenEvent {
            kind,
            path: report.path.clone(),
            lines: report.codes,
        });
        Ok(report)
    }
}

/// Move to `next`, announce it, and open its span.
fn enter(stage: &mut Stage, next: Stage, handler: &dyn SalesEventHandler) -> EnteredSpan {
    *stage = next;
    tracing::debug!(stage = %next, "entering stage");
    handler.on_stage_entered(&StageEnteredEvent { stage: next.name() });
    tracing::info_span!("stage", stage = %next).entered()
}
