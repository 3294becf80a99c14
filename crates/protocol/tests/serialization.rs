use bb_protocol::*;
use serde_json;
use serde_yaml;

#[test]
fn test_plan_deserialization_from_yaml() {
    let yaml_str = r#"
name: node-build
blocks:
  - name: install
    description: Install npm packages
    run: npm install
  - name: test
    run: npm test
  - name: banner
    echo: build finished
"#;

    let plan: BuildPlan = serde_yaml::from_str(yaml_str).expect("Failed to deserialize BuildPlan");

    assert_eq!(plan.name, "node-build");
    assert_eq!(plan.blocks.len(), 3);

    assert_eq!(plan.blocks[0].name, "install");
    assert_eq!(plan.blocks[0].display_description(), "Install npm packages");
    assert_eq!(plan.blocks[0].action, PlanAction::Run("npm install".to_string()));

    // Description falls back to the block name
    assert_eq!(plan.blocks[1].description, None);
    assert_eq!(plan.blocks[1].display_description(), "test");

    assert_eq!(plan.blocks[2].action, PlanAction::Echo("build finished".to_string()));
}

#[test]
fn test_plan_without_blocks_is_empty() {
    let plan: BuildPlan = serde_yaml::from_str("name: empty").expect("Failed to deserialize BuildPlan");
    assert!(plan.blocks.is_empty());
}

#[test]
fn test_plan_block_requires_an_action() {
    let yaml_str = r#"
name: broken
blocks:
  - name: nothing-to-do
"#;

    let result: Result<BuildPlan, _> = serde_yaml::from_str(yaml_str);
    assert!(result.is_err());
}

#[test]
fn test_plan_serialization_round_trip() {
    let plan = BuildPlan {
        name: "roundtrip".to_string(),
        blocks: vec![PlanBlock {
            name: "compile".to_string(),
            description: None,
            action: PlanAction::Run("make".to_string()),
        }],
    };

    let yaml = serde_yaml::to_string(&plan).expect("Failed to serialize BuildPlan");
    assert!(yaml.contains("run: make"));
    assert!(!yaml.contains("description"));

    let deserialized: BuildPlan = serde_yaml::from_str(&yaml).expect("Failed to deserialize BuildPlan");
    assert_eq!(deserialized, plan);
}

#[test]
fn test_config_defaults_from_empty_toml() {
    let config: BbConfig = toml::from_str("").expect("Failed to deserialize BbConfig");

    assert_eq!(config.runner.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(config.logging.filter, "info");
    assert!(!config.logging.json);
}

#[test]
fn test_config_partial_sections() {
    let toml_str = r#"
[runner]
poll_interval_ms = 250

[logging]
json = true
"#;

    let config: BbConfig = toml::from_str(toml_str).expect("Failed to deserialize BbConfig");

    assert_eq!(config.runner.poll_interval_ms, 250);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.json);
}

#[test]
fn test_completion_status_serialization() {
    let json = serde_json::to_string(&CompletionStatus::Interrupted).expect("Failed to serialize");
    assert_eq!(json, "\"INTERRUPTED\"");

    let status: CompletionStatus = serde_json::from_str("\"SUCCESS\"").expect("Failed to deserialize");
    assert_eq!(status, CompletionStatus::Success);
}

#[test]
fn test_event_serialization() {
    let event = Event::block_opened("compile", "Compile sources");

    let json = serde_json::to_string(&event).expect("Failed to serialize Event");
    assert!(json.contains(r#""type":"blockOpened""#));
    assert!(json.contains(r#""name":"compile""#));
    assert!(json.contains(r#""description":"Compile sources""#));

    let deserialized: Event = serde_json::from_str(&json).expect("Failed to deserialize Event");
    assert_eq!(deserialized, event);
}

#[test]
fn test_event_timestamp_accessor() {
    let event = Event::block_closed("compile");
    match &event {
        Event::BlockClosed { timestamp, .. } => assert_eq!(event.timestamp(), *timestamp),
        other => panic!("unexpected event: {:?}", other),
    }
}
