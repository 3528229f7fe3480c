//! Tracing subscriber setup for the command-line tools

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive used when `RUST_LOG` is not set
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Build the filter, letting `RUST_LOG` override the default directive
pub fn build_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install the global subscriber
///
/// Log lines go to stderr so stdout stays reserved for reports and encoded
/// diagrams. A second call is a no-op.
pub fn init(quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
