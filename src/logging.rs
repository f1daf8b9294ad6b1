//! Logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Initializes structured logging to stderr.
///
/// Stdout is left to the generated page when printing with `--stdout`.
/// The filter is taken from `RUST_LOG`, falling back to `info`.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
