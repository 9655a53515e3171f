//! Logging bootstrap for hosts that run the library standalone.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global subscriber for the configured level and format.
///
/// The library itself only emits `debug` events from the approval engine;
/// hosts that already have a subscriber should skip this and route the
/// `clubhub_core` target through their own.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| anyhow::anyhow!("invalid log filter {:?}: {err}", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.format.as_str() == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install subscriber: {err}"))
}
