//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `SALES_LOG` environment variable for per-module log levels.
/// Format: `SALES_LOG=sales_pipeline::records=debug,sales_core=info`
///
/// Falls back to `sales=warn` if `SALES_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for the run's user-facing output.
///
/// This function is idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SALES_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sales=warn"));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
