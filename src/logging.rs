//! Diagnostic logging
//!
//! Events go to stderr through `tracing-subscriber`, filtered by
//! `TASKGRADE_LOG` (same syntax as `RUST_LOG`). Stdout stays reserved for the
//! single verdict line.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "TASKGRADE_LOG";

/// Filter used when `TASKGRADE_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}
