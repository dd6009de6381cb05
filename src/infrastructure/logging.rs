//! Diagnostic logging setup

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter (e.g. `debug`, `timesheet=trace`)
pub const LOG_ENV: &str = "TIMESHEET_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. Quiet unless TIMESHEET_LOG asks otherwise.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    });
}
