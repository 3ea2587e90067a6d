//! Discovered record files.

use std::path::{Path, PathBuf};

/// A sales record file whose name is a fixed-width numeric id plus extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    numeric_id: String,
    id: u64,
    file_name: String,
    path: PathBuf,
}

impl RecordFile {
    /// Build from a path whose file name already matched the record pattern.
    /// `numeric_id` is the digit prefix; returns `None` if it does not parse.
    pub fn new(numeric_id: &str, path: PathBuf) -> Option<Self> {
        let id = numeric_id.parse::<u64>().ok()?;
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            numeric_id: numeric_id.to_string(),
            id,
            file_name,
            path,
        })
    }

    /// The zero-padded digit prefix, e.g. `"00000001"`.
    pub fn numeric_id(&self) -> &str {
        &self.numeric_id
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
