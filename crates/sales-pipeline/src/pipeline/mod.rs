//! Pipeline orchestration: load, discover, validate, aggregate, write.

pub mod process;
pub mod runner;
pub mod stage;

pub use process::{process_one, ProcessedRecord};
pub use runner::Pipeline;
pub use stage::Stage;
