//! Build plan models for `*.yaml` plan files.
//!
//! A build plan is an ordered list of blocks. Each block either runs a shell
//! command as its own process or writes a message to the progress log.

use serde::{Deserialize, Serialize};

/// What a single plan block does.
///
/// Externally tagged so that the YAML reads naturally:
///
/// ```yaml
/// - name: install
///   run: npm install
/// - name: banner
///   echo: all done
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    /// Run a command line through the platform shell.
    ///
    /// The block succeeds when the command exits with status 0.
    Run(String),

    /// Write a message to the progress log. Always succeeds.
    Echo(String),
}

/// One block of a build plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanBlock {
    /// Machine identifier of the block.
    pub name: String,

    /// Human readable description; the name is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The work performed inside the block.
    #[serde(flatten)]
    pub action: PlanAction,
}

impl PlanBlock {
    /// Description to show for this block, falling back to its name.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

/// A full build plan.
///
/// # Example
///
/// ```yaml
/// name: node-build
/// blocks:
///   - name: install
///     description: Install npm packages
///     run: npm install
///   - name: test
///     run: npm test
///   - name: banner
///     echo: build finished
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Name identifying this plan.
    pub name: String,

    /// Blocks in execution order.
    #[serde(default)]
    pub blocks: Vec<PlanBlock>,
}
