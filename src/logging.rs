/// Logging setup: `tracing` events to stderr, filtered by `--log`/`--debug`.
///
/// Stdout carries rendered output only, so the subscriber always writes to
/// stderr.
use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(settings.log_filter())
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
