//! Summary output: one `code,name,total` line per defined code.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sales_core::constants::FIELD_DELIMITER;
use sales_core::errors::SummaryError;
use sales_core::types::{CodeNames, DefinitionKind, SalesTotals, SummaryReport};

/// Write `directory/file_name`, replacing any existing file.
///
/// Lines follow `names` order. Codes never touched by a record are written
/// with a total of 0.
pub fn write_summary(
    directory: &Path,
    file_name: &str,
    kind: DefinitionKind,
    names: &CodeNames,
    totals: &SalesTotals,
) -> Result<SummaryReport, SummaryError> {
    let path = directory.join(file_name);
    let io_error = |source| SummaryError::Io {
        kind,
        path: path.clone(),
        source,
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
    for (code, name) in names {
        let total = totals.get(code).unwrap_or_default();
        writeln!(
            writer,
            "{code}{FIELD_DELIMITER}{name}{FIELD_DELIMITER}{total}"
        )
        .map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    tracing::info!(kind = %kind, path = %path.display(), lines = names.len(), "summary written");
    Ok(SummaryReport {
        kind,
        path: path.clone(),
        codes: names.len(),
        total: totals.grand_total(),
    })
}
