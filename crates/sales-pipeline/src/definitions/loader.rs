//! Master list loading: `code,name` lines into code tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use sales_core::constants::FIELD_DELIMITER;
use sales_core::errors::DefinitionError;
use sales_core::types::{DefinitionKind, Definitions};

static BRANCH_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DefinitionKind::Branch.code_pattern()).unwrap());

static COMMODITY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DefinitionKind::Commodity.code_pattern()).unwrap());

/// Loads one kind of master list, validating codes against the kind's pattern.
pub struct DefinitionLoader {
    kind: DefinitionKind,
    code_pattern: &'static Regex,
}

impl DefinitionLoader {
    pub fn new(kind: DefinitionKind) -> Self {
        let code_pattern = match kind {
            DefinitionKind::Branch => &*BRANCH_CODE_RE,
            DefinitionKind::Commodity => &*COMMODITY_CODE_RE,
        };
        Self { kind, code_pattern }
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    /// Load `directory/file_name`.
    ///
    /// Every line must be exactly `code,name` with a valid code. A repeated
    /// code overwrites the earlier name and resets its total.
    pub fn load(&self, directory: &Path, file_name: &str) -> Result<Definitions, DefinitionError> {
        let path = directory.join(file_name);
        if !path.exists() {
            return Err(DefinitionError::FileNotFound {
                kind: self.kind,
                path,
            });
        }

        let io_error = |source| DefinitionError::Io {
            kind: self.kind,
            path: path.clone(),
            source,
        };
        let reader = BufReader::new(File::open(&path).map_err(io_error)?);

        let mut definitions = Definitions::new(self.kind);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(io_error)?;
            let (code, name) =
                self.parse_line(&line)
                    .map_err(|reason| DefinitionError::InvalidFormat {
                        kind: self.kind,
                        path: path.clone(),
                        line: index + 1,
                        reason,
                    })?;

            if definitions.define(code, name) {
                tracing::warn!(
                    kind = %self.kind,
                    code,
                    line = index + 1,
                    "duplicate code, earlier definition overwritten"
                );
            }
            tracing::debug!(kind = %self.kind, %line, "definition");
        }

        tracing::info!(
            kind = %self.kind,
            path = %path.display(),
            codes = definitions.len(),
            "definitions loaded"
        );
        Ok(definitions)
    }

    /// Split one line and validate its code. The error is the reason text.
    pub fn parse_line<'a>(&self, line: &'a str) -> Result<(&'a str, &'a str), String> {
        let fields = split_fields(line);
        let [code, name] = fields.as_slice() else {
            return Err(format!("expected 2 fields, found {}", fields.len()));
        };
        if !self.code_pattern.is_match(code) {
            return Err(format!("invalid {} code {code:?}", self.kind));
        }
        Ok((*code, *name))
    }
}

/// Split a definition or summary line on the field delimiter.
///
/// Trailing empty fields are dropped, so `"001,Tokyo,"` is two fields and
/// `"001,"` is one.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Load one master list with a freshly compiled loader.
pub fn load_definitions(
    directory: &Path,
    file_name: &str,
    kind: DefinitionKind,
) -> Result<Definitions, DefinitionError> {
    DefinitionLoader::new(kind).load(directory, file_name)
}
