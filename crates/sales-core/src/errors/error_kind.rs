//! User-facing error classification and message formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DefinitionKind;

/// Closed set of failure classes a run can end in. Exactly one is reported
/// per failing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    FileNotFound,
    InvalidDefinitionFormat,
    NonConsecutiveFilenames,
    InvalidRecordFormat,
    UnknownBranchCode,
    UnknownCommodityCode,
    AmountOverflow,
    UnknownError,
}

/// Contextual data attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContext<'a> {
    None,
    Definition(DefinitionKind),
    File(&'a str),
    Digits(u32),
}

impl ErrorKind {
    /// Render the message for this kind. Context that does not apply to the
    /// kind is ignored; missing context falls back to a generic subject.
    pub fn message(self, context: MessageContext<'_>) -> String {
        let file = match context {
            MessageContext::File(name) => name,
            _ => "a sales file",
        };
        match self {
            Self::FileNotFound => {
                format!("{} definition file does not exist", definition_label(context))
            }
            Self::InvalidDefinitionFormat => format!(
                "{} definition file has an invalid format",
                definition_label(context)
            ),
            Self::NonConsecutiveFilenames => "Sales file names are not consecutive".to_string(),
            Self::InvalidRecordFormat => format!("{file} has an invalid format"),
            Self::UnknownBranchCode => format!("Branch code in {file} is invalid"),
            Self::UnknownCommodityCode => format!("Commodity code in {file} is invalid"),
            Self::AmountOverflow => match context {
                MessageContext::Digits(digits) => {
                    format!("Total amount exceeded {digits} digits")
                }
                _ => "Total amount exceeded the digit limit".to_string(),
            },
            Self::UnknownError => "An unexpected error occurred".to_string(),
        }
    }
}

fn definition_label(context: MessageContext<'_>) -> &'static str {
    match context {
        MessageContext::Definition(kind) => kind.label(),
        _ => "Master",
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileNotFound => "FileNotFound",
            Self::InvalidDefinitionFormat => "InvalidDefinitionFormat",
            Self::NonConsecutiveFilenames => "NonConsecutiveFilenames",
            Self::InvalidRecordFormat => "InvalidRecordFormat",
            Self::UnknownBranchCode => "UnknownBranchCode",
            Self::UnknownCommodityCode => "UnknownCommodityCode",
            Self::AmountOverflow => "AmountOverflow",
            Self::UnknownError => "UnknownError",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_context_is_attached() {
        let msg = ErrorKind::UnknownBranchCode.message(MessageContext::File("00000002.rcd"));
        assert_eq!(msg, "Branch code in 00000002.rcd is invalid");
    }

    #[test]
    fn definition_context_selects_label() {
        let msg = ErrorKind::FileNotFound.message(MessageContext::Definition(
            DefinitionKind::Commodity,
        ));
        assert_eq!(msg, "Commodity definition file does not exist");
    }

    #[test]
    fn unknown_error_ignores_context() {
        assert_eq!(
            ErrorKind::UnknownError.message(MessageContext::File("x.rcd")),
            "An unexpected error occurred"
        );
    }
}
