//! Record file discovery: list, filter by name, sort, check the sequence.

use std::fs;
use std::path::Path;

use sales_core::config::InputConfig;
use sales_core::errors::DiscoveryError;

use super::sequence::verify_consecutive;
use super::types::RecordFile;

/// Finds record files directly inside one directory (no recursion).
///
/// A record file name is exactly `id_width` ASCII digits, a `.`, and the
/// extension, compared case-sensitively.
pub struct RecordFileDiscoverer {
    extension: String,
    id_width: usize,
}

impl RecordFileDiscoverer {
    pub fn new(extension: &str, id_width: usize) -> Self {
        Self {
            extension: extension.to_string(),
            id_width,
        }
    }

    pub fn from_config(input: &InputConfig) -> Self {
        Self::new(
            input.effective_record_extension(),
            input.effective_record_id_width(),
        )
    }

    /// Returns the numeric prefix if `name` is a record file name.
    pub fn match_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        let stem = name.strip_suffix(self.extension.as_str())?.strip_suffix('.')?;
        let all_digits = stem.len() == self.id_width && stem.bytes().all(|b| b.is_ascii_digit());
        all_digits.then_some(stem)
    }

    /// Regular files in `directory` with record file names, sorted by name.
    pub fn list(&self, directory: &Path) -> Result<Vec<RecordFile>, DiscoveryError> {
        let io_error = |source| DiscoveryError::Io {
            path: directory.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(directory).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(numeric_id) = self.match_name(name) else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "skipping non-file record name");
                continue;
            }
            if let Some(file) = RecordFile::new(numeric_id, path) {
                files.push(file);
            }
        }

        // Fixed-width ids: name order is numeric order.
        files.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        Ok(files)
    }

    /// List, then verify the ids form a contiguous run.
    pub fn discover(&self, directory: &Path) -> Result<Vec<RecordFile>, DiscoveryError> {
        let files = self.list(directory)?;
        verify_consecutive(&files)?;
        Ok(files)
    }
}
