//! Tests for error classification, codes and user messages.

use std::collections::HashSet;
use std::path::PathBuf;

use sales_core::errors::*;
use sales_core::types::DefinitionKind;

fn io_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
}

fn one_of_each() -> Vec<PipelineError> {
    vec![
        DefinitionError::FileNotFound {
            kind: DefinitionKind::Branch,
            path: PathBuf::from("/in/branch.lst"),
        }
        .into(),
        DefinitionError::InvalidFormat {
            kind: DefinitionKind::Commodity,
            path: PathBuf::from("/in/commodity.lst"),
            line: 2,
            reason: "expected 2 fields, found 3".into(),
        }
        .into(),
        DiscoveryError::NonConsecutive {
            previous: "00000001.rcd".into(),
            next: "00000003.rcd".into(),
        }
        .into(),
        RecordError::InvalidFormat {
            file: "00000002.rcd".into(),
            lines: 4,
        }
        .into(),
        RecordError::UnknownBranchCode {
            file: "00000002.rcd".into(),
            code: "999".into(),
        }
        .into(),
        RecordError::UnknownCommodityCode {
            file: "00000002.rcd".into(),
            code: "ZZZZZZZZ".into(),
        }
        .into(),
        AggregateError::AmountOverflow {
            kind: DefinitionKind::Branch,
            code: "001".into(),
            file: "00000002.rcd".into(),
            current: 9_000_000_000,
            amount: 9_000_000_000,
            digits: 10,
        }
        .into(),
        RecordError::MalformedAmount {
            file: "00000002.rcd".into(),
            value: "12a".into(),
        }
        .into(),
    ]
}

#[test]
fn every_kind_is_reachable() {
    let kinds: HashSet<ErrorKind> = one_of_each().iter().map(PipelineError::kind).collect();
    assert_eq!(kinds.len(), 8);
}

#[test]
fn all_errors_have_error_code() {
    for error in one_of_each() {
        assert!(!error.error_code().is_empty(), "{error:?}");
    }
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert!(!config.error_code().is_empty());
    let summary = SummaryError::Io {
        kind: DefinitionKind::Branch,
        path: PathBuf::from("/out/branch.out"),
        source: io_error(),
    };
    assert_eq!(summary.error_code(), error_code::IO_ERROR);
}

#[test]
fn io_faults_are_unknown_errors() {
    let errors: Vec<PipelineError> = vec![
        DefinitionError::Io {
            kind: DefinitionKind::Branch,
            path: PathBuf::from("/in/branch.lst"),
            source: io_error(),
        }
        .into(),
        DiscoveryError::Io {
            path: PathBuf::from("/in"),
            source: io_error(),
        }
        .into(),
        RecordError::Io {
            file: "00000001.rcd".into(),
            source: io_error(),
        }
        .into(),
        SummaryError::Io {
            kind: DefinitionKind::Commodity,
            path: PathBuf::from("/in/commodity.out"),
            source: io_error(),
        }
        .into(),
        ConfigError::ValidationFailed {
            field: "limits.total_digits".into(),
            message: "must be between 1 and 19".into(),
        }
        .into(),
        PipelineError::Arguments("missing input directory".into()),
    ];
    for error in errors {
        assert_eq!(error.kind(), ErrorKind::UnknownError, "{error:?}");
        assert_eq!(error.user_message(), "An unexpected error occurred");
    }
}

#[test]
fn user_messages_carry_context() {
    let messages: Vec<String> = one_of_each().iter().map(|e| e.user_message()).collect();
    assert_eq!(
        messages,
        vec![
            "Branch definition file does not exist",
            "Commodity definition file has an invalid format",
            "Sales file names are not consecutive",
            "00000002.rcd has an invalid format",
            "Branch code in 00000002.rcd is invalid",
            "Commodity code in 00000002.rcd is invalid",
            "Total amount exceeded 10 digits",
            "An unexpected error occurred",
        ]
    );
}

#[test]
fn tagged_string_prefixes_code() {
    let error = RecordError::UnknownBranchCode {
        file: "00000005.rcd".into(),
        code: "999".into(),
    };
    let tagged = error.tagged_string();
    assert!(tagged.starts_with("[UNKNOWN_BRANCH_CODE] "), "{tagged}");
    assert!(tagged.contains("00000005.rcd"));
}

#[test]
fn from_conversions_wrap_subsystem_errors() {
    let pipeline: PipelineError = DiscoveryError::NonConsecutive {
        previous: "00000001.rcd".into(),
        next: "00000003.rcd".into(),
    }
    .into();
    assert!(matches!(
        pipeline,
        PipelineError::Discovery(DiscoveryError::NonConsecutive { .. })
    ));

    let pipeline: PipelineError = ConfigError::ParseError {
        path: "sales.toml".into(),
        message: "bad".into(),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Config(_)));
}
