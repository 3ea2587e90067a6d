//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod input_config;
pub mod limits_config;
pub mod output_config;
pub mod sales_config;

pub use input_config::InputConfig;
pub use limits_config::LimitsConfig;
pub use output_config::OutputConfig;
pub use sales_config::{CliOverrides, SalesConfig};
