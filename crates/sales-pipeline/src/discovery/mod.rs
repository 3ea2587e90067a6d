//! Discovery subsystem: record file listing and sequence validation.

pub mod discoverer;
pub mod sequence;
pub mod types;

pub use discoverer::RecordFileDiscoverer;
pub use sequence::verify_consecutive;
pub use types::RecordFile;
