//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout only ever carries the asset report or the
//! relayed child output. The filter is read from `YTDLX_LOG` and defaults to
//! warnings only.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "YTDLX_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
