//! Configuration loading.
//!
//! This module loads runner and logging settings from `bb.toml` and build
//! plans from YAML files.

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_config_file, load_plan, CONFIG_FILE_NAME};
