//! Diagnostic logging setup.
//!
//! Installs a global `tracing` subscriber configured from the `[logging]`
//! section of `bb.toml`. `RUST_LOG` takes precedence over the configured
//! filter when set.

use bb_protocol::config_models::LoggingConfig;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless: if a subscriber is already
/// installed the existing one is kept.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already initialized - keeping it");
    }
}
