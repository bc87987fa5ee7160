//! Diagnostic logging.
//!
//! Library crates emit `tracing` events; the binary installs a subscriber that writes
//! them to stderr. The filter comes from the `ARBOR_LOG` environment variable when it is
//! set, otherwise from `[log] level` in the configuration.

use std::io::{self, IsTerminal};

use arbor_config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{
    EnvFilter, Registry, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable holding a filter directive that overrides the configuration.
pub const LOG_ENV: &str = "ARBOR_LOG";

/// Installs the global subscriber.
///
/// Must be called at most once per process.
pub fn init_logging(config_level: &str) {
    let filter = build_env_filter(config_level);

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(true)
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .init();
}

/// Builds the filter: `ARBOR_LOG` first, then the configured level.
fn build_env_filter(config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }

    match config_filter(config_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("warning: invalid [log] level {config_level:?}: {e}");
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }
    }
}

/// Parses the configured level, treating a blank value as the default.
fn config_filter(level: &str) -> Result<EnvFilter, ParseError> {
    let level = level.trim();
    if level.is_empty() {
        return Ok(EnvFilter::new(DEFAULT_LOG_LEVEL));
    }
    EnvFilter::try_new(level)
}
