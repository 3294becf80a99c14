//! Settings models for `bb.toml`.
//!
//! This module defines the structure of the configuration file that controls
//! how the runner drives build processes and how diagnostics are logged.

use serde::Deserialize;
use serde::Serialize;

/// Default delay between two polls of a running process.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Represents all settings from `bb.toml`.
///
/// Every section is optional; missing sections fall back to defaults.
///
/// # Example
///
/// ```toml
/// [runner]
/// poll_interval_ms = 250
///
/// [logging]
/// filter = "bb_core=debug,info"
/// json = true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BbConfig {
    /// Settings for the process runner.
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Settings for diagnostic logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the runner polls a build process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Milliseconds to wait between polls of a process that is still running.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

/// Diagnostic logging settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `bb_core=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit log lines as JSON instead of human readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}
