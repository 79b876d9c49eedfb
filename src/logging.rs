//! Tracing subscriber setup driven by [`LoggingConfig`].

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`. `RUST_LOG`, when set, takes precedence.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let level = LevelFilter::from_level(config.level.into());
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install a global stderr subscriber.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    }
}
