//! Tracing subscriber setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "oktad=debug";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber, writing to stderr.
///
/// `verbose` forces debug output for this crate; otherwise `RUST_LOG` is
/// honoured, falling back to warnings only.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to set subscriber: {}", e))
}

fn filter(verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return EnvFilter::try_new(VERBOSE_FILTER)
            .map_err(|e| anyhow!("invalid log filter '{}': {}", VERBOSE_FILTER, e));
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| anyhow!("invalid log filter: {}", e))
}
