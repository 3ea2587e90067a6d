//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputConfig, LimitsConfig, OutputConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SALES_*`)
/// 3. Project config (`sales.toml` in the input directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SalesConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub limits: LimitsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub total_digits: Option<u32>,
}

impl SalesConfig {
    /// Load configuration for a run over `input_dir`.
    pub fn load(
        input_dir: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = input_dir.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.is_file() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SalesConfig) -> Result<(), ConfigError> {
        let digits = config.limits.effective_total_digits();
        if !(1..=constants::MAX_TOTAL_DIGITS).contains(&digits) {
            return Err(ConfigError::ValidationFailed {
                field: "limits.total_digits".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_TOTAL_DIGITS),
            });
        }
        let width = config.input.effective_record_id_width();
        if !(1..=constants::MAX_RECORD_ID_WIDTH).contains(&width) {
            return Err(ConfigError::ValidationFailed {
                field: "input.record_id_width".to_string(),
                message: format!(
                    "must be between 1 and {}",
                    constants::MAX_RECORD_ID_WIDTH
                ),
            });
        }
        let extension = config.input.effective_record_extension();
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::ValidationFailed {
                field: "input.record_extension".to_string(),
                message: "must be non-empty and alphanumeric".to_string(),
            });
        }
        for (field, value) in [
            ("input.branch_definitions", &config.input.branch_definitions),
            ("input.commodity_definitions", &config.input.commodity_definitions),
            ("output.branch_summary", &config.output.branch_summary),
            ("output.commodity_summary", &config.output.commodity_summary),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SalesConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SalesConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SalesConfig, other: &SalesConfig) {
        // Input
        if other.input.branch_definitions.is_some() {
            base.input.branch_definitions = other.input.branch_definitions.clone();
        }
        if other.input.commodity_definitions.is_some() {
            base.input.commodity_definitions = other.input.commodity_definitions.clone();
        }
        if other.input.record_extension.is_some() {
            base.input.record_extension = other.input.record_extension.clone();
        }
        if other.input.record_id_width.is_some() {
            base.input.record_id_width = other.input.record_id_width;
        }

        // Output
        if other.output.directory.is_some() {
            base.output.directory = other.output.directory.clone();
        }
        if other.output.branch_summary.is_some() {
            base.output.branch_summary = other.output.branch_summary.clone();
        }
        if other.output.commodity_summary.is_some() {
            base.output.commodity_summary = other.output.commodity_summary.clone();
        }

        // Limits
        if other.limits.total_digits.is_some() {
            base.limits.total_digits = other.limits.total_digits;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SALES_TOTAL_DIGITS`, `SALES_OUTPUT_DIR`, etc.
    fn apply_env_overrides(config: &mut SalesConfig) {
        if let Ok(val) = std::env::var("SALES_BRANCH_DEFINITIONS") {
            config.input.branch_definitions = Some(val);
        }
        if let Ok(val) = std::env::var("SALES_COMMODITY_DEFINITIONS") {
            config.input.commodity_definitions = Some(val);
        }
        if let Ok(val) = std::env::var("SALES_RECORD_EXTENSION") {
            config.input.record_extension = Some(val);
        }
        if let Ok(val) = std::env::var("SALES_OUTPUT_DIR") {
            config.output.directory = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SALES_TOTAL_DIGITS") {
            match val.parse::<u32>() {
                Ok(v) => config.limits.total_digits = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparsable SALES_TOTAL_DIGITS"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SalesConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.output_dir {
            config.output.directory = Some(v.clone());
        }
        if let Some(v) = cli.total_digits {
            config.limits.total_digits = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
