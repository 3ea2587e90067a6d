//! Summary subsystem: serializing totals back to flat files.

pub mod writer;

pub use writer::write_summary;
