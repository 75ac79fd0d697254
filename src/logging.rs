//! Diagnostic logging setup.
//!
//! User-facing result and error lines go to stdout; diagnostics go to stderr through
//! `tracing`, filtered by `SCAFFOLD_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SCAFFOLD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
