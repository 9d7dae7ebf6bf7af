//! Tracing setup.
//!
//! The filter comes from `[logging] level` unless `RUST_LOG` overrides it.
//! The `format` setting picks json output for deployments or pretty output
//! for local runs; anything unrecognized falls back to pretty.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, PartialEq)]
enum LogFormat {
    Json,
    Pretty,
}

fn format_for(format: &str) -> LogFormat {
    match format {
        "json" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

/// Installs the global tracing subscriber. Called once at startup, before
/// the store backend is built so connection problems are logged.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format_for(&config.format) {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
