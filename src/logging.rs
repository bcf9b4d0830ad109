//! Logging configuration for oraddl.
//!
//! Logs always go to stderr so that stdout carries nothing but DDL.

use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for the given verbosity.
///
/// `quiet` wins over `verbose`. Without flags only warnings are shown.
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Initializes stderr logging.
///
/// `RUST_LOG` takes precedence over the verbosity flags when set.
pub fn init_stderr_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
