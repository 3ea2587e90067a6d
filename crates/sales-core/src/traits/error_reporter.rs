//! Sink for the single message a failed run produces.

use crate::errors::{ErrorKind, PipelineError};

/// Receives a classified error and its human-readable message.
pub trait ErrorReporter {
    fn report(&self, kind: ErrorKind, message: &str);

    /// Classify and report a pipeline error.
    fn report_error(&self, error: &PipelineError) {
        self.report(error.kind(), &error.user_message());
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(ErrorKind, &str),
{
    fn report(&self, kind: ErrorKind, message: &str) {
        self(kind, message)
    }
}
