//! Loader for `bb.toml` and build plan files.
//!
//! - `bb.toml`: runner and logging settings, optional
//! - `*.yaml` / `*.yml`: build plans, one plan per file

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use bb_protocol::config_models::BbConfig;
use bb_protocol::plan_models::{BuildPlan, PlanAction};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Name of the settings file looked up in a project root.
pub const CONFIG_FILE_NAME: &str = "bb.toml";

/// Loads settings from `bb.toml` inside `root`.
///
/// A missing file is not an error: defaults are returned instead.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, is not valid
/// TOML, or contains invalid values.
///
/// # Example
///
/// ```rust,no_run
/// use bb_core::config::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Polling every {} ms", config.runner.poll_interval_ms);
/// # Ok(())
/// # }
/// ```
pub fn load_config(root: &Path) -> ConfigResult<BbConfig> {
    let config_path = root.join(CONFIG_FILE_NAME);

    // If bb.toml doesn't exist, return default
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(BbConfig::default());
    }

    load_config_file(&config_path)
}

/// Loads settings from an explicit file path.
///
/// Unlike [`load_config`], a missing file is reported as `FileRead`.
pub fn load_config_file(path: &Path) -> ConfigResult<BbConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: BbConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.runner.poll_interval_ms == 0 {
        return Err(ConfigError::InvalidConfig {
            path: path.to_path_buf(),
            reason: "runner.poll_interval_ms must be greater than zero".to_string(),
        });
    }

    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Loads and validates a build plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, is not valid YAML, or
/// the plan has an empty name, an empty or duplicate block name, or an
/// empty command.
pub fn load_plan(path: &Path) -> ConfigResult<BuildPlan> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let plan: BuildPlan =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_plan(&plan).map_err(|reason| ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(path = %path.display(), blocks = plan.blocks.len(), "Loaded build plan");
    Ok(plan)
}

fn validate_plan(plan: &BuildPlan) -> Result<(), String> {
    if plan.name.trim().is_empty() {
        return Err("plan name must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    for (index, block) in plan.blocks.iter().enumerate() {
        if block.name.trim().is_empty() {
            return Err(format!("block #{} has an empty name", index + 1));
        }
        if !seen.insert(block.name.as_str()) {
            return Err(format!("block name '{}' is used more than once", block.name));
        }
        if let PlanAction::Run(command) = &block.action {
            if command.trim().is_empty() {
                return Err(format!("block '{}' has an empty command", block.name));
            }
        }
    }

    Ok(())
}
