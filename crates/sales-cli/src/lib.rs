//! sales-cli: argument parsing, console reporting and exit codes for
//! `calculate-sales`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use sales_core::config::{CliOverrides, SalesConfig};
use sales_core::constants::VERSION;
use sales_core::errors::{ErrorKind, MessageContext, PipelineError};
use sales_core::events::NoOpHandler;
use sales_core::traits::ErrorReporter;
use sales_core::tracing::init_tracing;
use sales_core::RunReport;
use sales_pipeline::Pipeline;

#[derive(Parser, Debug)]
#[command(name = "calculate-sales", version = VERSION)]
#[command(about = "Aggregate branch and commodity sales totals from daily record files")]
pub struct Cli {
    /// Directory holding the definition lists and the record files.
    pub input_dir: PathBuf,
    /// Write the summary files here instead of the input directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Maximum number of digits a running total may reach.
    #[arg(long)]
    pub total_digits: Option<u32>,
    /// Print the run report as JSON on success.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output_dir: self.output_dir.clone(),
            total_digits: self.total_digits,
        }
    }
}

/// Prints the user message to stdout.
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn report(&self, _kind: ErrorKind, message: &str) {
        println!("{message}");
    }
}

/// Parse `args`, run the pipeline, and report the outcome.
///
/// Exactly one message reaches `reporter` on failure.
pub fn run<I, T>(args: I, reporter: &dyn ErrorReporter) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_tracing();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            if matches!(
                error.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) {
                let _ = error.print();
                return ExitCode::SUCCESS;
            }
            let error = PipelineError::Arguments(error.kind().to_string());
            tracing::error!(%error, "invalid arguments");
            reporter.report_error(&error);
            return ExitCode::FAILURE;
        }
    };

    let report = match execute(&cli) {
        Ok(report) => report,
        Err(error) => {
            reporter.report_error(&error);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                tracing::error!(%error, "failed to serialize run report");
                reporter.report(
                    ErrorKind::UnknownError,
                    &ErrorKind::UnknownError.message(MessageContext::None),
                );
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Resolve configuration for `cli` and run the pipeline once.
pub fn execute(cli: &Cli) -> Result<RunReport, PipelineError> {
    let config = SalesConfig::load(&cli.input_dir, Some(&cli.overrides()))?;
    Pipeline::new(config)?.run(&cli.input_dir, &NoOpHandler)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn collect(args: &[&str]) -> (ExitCode, Vec<(ErrorKind, String)>) {
        let seen = RefCell::new(Vec::new());
        let reporter = |kind: ErrorKind, message: &str| {
            seen.borrow_mut().push((kind, message.to_string()));
        };
        let code = run(args.iter().copied(), &reporter);
        (code, seen.into_inner())
    }

    #[test]
    fn missing_input_dir_is_unknown_error() {
        let (code, seen) = collect(&["calculate-sales"]);
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            seen,
            vec![(
                ErrorKind::UnknownError,
                "An unexpected error occurred".to_string()
            )]
        );
    }

    #[test]
    fn extra_positional_is_unknown_error() {
        let (code, seen) = collect(&["calculate-sales", "a", "b"]);
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, ErrorKind::UnknownError);
    }

    #[test]
    fn overrides_carry_flags() {
        let cli = Cli::try_parse_from([
            "calculate-sales",
            "in",
            "--output-dir",
            "out",
            "--total-digits",
            "12",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.output_dir, Some(PathBuf::from("out")));
        assert_eq!(overrides.total_digits, Some(12));
        assert!(!cli.json);
    }
}
