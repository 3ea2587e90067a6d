//! Collaborator traits.

pub mod error_reporter;

pub use error_reporter::ErrorReporter;
