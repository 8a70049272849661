// tests/config_test.rs
use bump_version::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.files.manifest, "manifest.json");
    assert_eq!(config.files.changelog, "CHANGELOG.md");
    assert_eq!(config.tags.prefix, "v");
    assert_eq!(config.changelog.heading, "# Changelog");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[files]
manifest = "extension/manifest.json"

[tags]
prefix = "release-"

[conventional_commits]
minor_types = ["feat", "perf"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.files.manifest, "extension/manifest.json");
    // Unspecified keys keep their defaults
    assert_eq!(config.files.changelog, "CHANGELOG.md");
    assert_eq!(config.tags.prefix, "release-");
    assert!(config
        .conventional_commits
        .minor_types
        .contains(&"perf".to_string()));
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert!(config
        .conventional_commits
        .minor_types
        .contains(&"feat".to_string()));
    assert!(config
        .conventional_commits
        .patch_types
        .contains(&"fix".to_string()));
    assert!(config
        .conventional_commits
        .breaking_change_indicators
        .contains(&"BREAKING CHANGE".to_string()));
}

#[test]
fn test_load_missing_custom_path_fails() {
    assert!(load_config(Some("/nonexistent/bumpversion.toml")).is_err());
}
