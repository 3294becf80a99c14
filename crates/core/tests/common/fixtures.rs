//! Temporary project fixtures.

use tempfile::TempDir;

/// Create a temporary project containing `plan.yaml` and, optionally,
/// `bb.toml`.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project(plan_yaml: &str, config_toml: Option<&str>) -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::write(root.join("plan.yaml"), plan_yaml)?;
    if let Some(config) = config_toml {
        std::fs::write(root.join("bb.toml"), config)?;
    }

    Ok(temp_dir)
}

/// A plan running two shell commands and an echo block.
#[allow(dead_code)]
pub fn sample_plan_yaml() -> &'static str {
    r#"name: sample-build
blocks:
  - name: prepare
    description: Create output directory
    run: mkdir -p out
  - name: compile
    run: echo compiled > out/artifact.txt
  - name: banner
    echo: build finished
"#
}

/// A plan whose second block fails.
#[allow(dead_code)]
pub fn failing_plan_yaml() -> &'static str {
    r#"name: failing-build
blocks:
  - name: first
    run: "true"
  - name: broken
    run: exit 7
  - name: never
    run: touch never-created
"#
}
