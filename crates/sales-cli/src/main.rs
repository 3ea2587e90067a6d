use std::process::ExitCode;

use sales_cli::ConsoleReporter;

fn main() -> ExitCode {
    sales_cli::run(std::env::args_os(), &ConsoleReporter)
}
