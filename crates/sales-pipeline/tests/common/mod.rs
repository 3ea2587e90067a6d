//! Shared fixtures for sales-pipeline integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use sales_core::events::*;
use tempfile::TempDir;

pub const BRANCH_LST: &str = "001,Tokyo\n002,Osaka\n003,Sapporo\n";
pub const COMMODITY_LST: &str = "SFT00001,Laptop\nSFT00002,Mouse\nX0000001,Cable\n";

/// A scratch input directory.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Directory with the default branch and commodity lists.
    pub fn with_definitions() -> Self {
        let fixture = Self::empty();
        fixture.write("branch.lst", BRANCH_LST);
        fixture.write("commodity.lst", COMMODITY_LST);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> &Self {
        std::fs::write(self.dir.path().join(name), contents).unwrap();
        self
    }

    /// Write `{id:08}.rcd` with the three record lines.
    pub fn record(&self, id: u64, branch: &str, commodity: &str, amount: &str) -> &Self {
        self.write(
            &format!("{id:08}.rcd"),
            &format!("{branch}\n{commodity}\n{amount}\n"),
        )
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}

/// Records every event as a short string, in order.
#[derive(Default)]
pub struct RecordingHandler {
    pub events: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SalesEventHandler for RecordingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.push("run_started".into());
    }

    fn on_stage_entered(&self, event: &StageEnteredEvent) {
        self.push(format!("stage:{}", event.stage));
    }

    fn on_definitions_loaded(&self, event: &DefinitionsLoadedEvent) {
        self.push(format!("loaded:{}:{}", event.kind, event.codes));
    }

    fn on_records_discovered(&self, event: &RecordsDiscoveredEvent) {
        self.push(format!("discovered:{}", event.count));
    }

    fn on_record_processed(&self, event: &RecordProcessedEvent) {
        self.push(format!("processed:{}:{}", event.file, event.amount));
    }

    fn on_summary_written(&self, event: &SummaryWrittenEvent) {
        self.push(format!("written:{}:{}", event.kind, event.lines));
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        self.push(format!("complete:{}", event.grand_total));
    }

    fn on_run_failed(&self, event: &RunFailedEvent) {
        self.push(format!("failed:{}:{}", event.stage, event.kind));
    }
}
