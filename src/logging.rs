//! Logging configuration for outflux.
//!
//! Logs go to stderr so discovery output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Filter used by `--verbose`.
const VERBOSE_FILTER: &str = "outflux_discovery=debug,info";

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence over both defaults.
pub fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}
