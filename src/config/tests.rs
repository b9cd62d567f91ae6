//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::test_support::write_file;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.max_depth, 5);
    assert!(config.file_delimiter.is_none());
    assert!(config.base_dir.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
max_depth: 8
file_delimiter: "--- {filename} ---"
base_dir: prompts
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.max_depth, 8);
    assert_eq!(config.file_delimiter.as_deref(), Some("--- {filename} ---"));
    assert_eq!(config.base_dir, Some(PathBuf::from("prompts")));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
max_depth: 3
some_future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.max_depth, 3);
}

#[test]
fn test_zero_depth_is_allowed() {
    let config = Config::from_yaml("max_depth: 0").unwrap();
    assert_eq!(config.max_depth, 0);
    assert_eq!(config.loader(Path::new("/")).unwrap().max_depth(), 0);
}

#[test]
fn test_invalid_delimiter_is_rejected() {
    let err = Config::from_yaml("file_delimiter: \"--- {path} ---\"").unwrap_err();
    assert!(err.to_string().contains("unknown placeholder '{path}'"));
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("max_depth: [not a number").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_round_trip() {
    let config = Config {
        max_depth: 4,
        file_delimiter: Some("## {filename}".to_string()),
        base_dir: Some(PathBuf::from("templates")),
    };

    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_unset_options_are_not_serialized() {
    let yaml = Config::default().to_yaml().unwrap();
    assert!(!yaml.contains("file_delimiter"));
    assert!(!yaml.contains("base_dir"));
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
}

#[test]
fn test_discover_reads_config_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), CONFIG_FILE_NAME, "max_depth: 2\n");
    assert_eq!(Config::discover(dir.path()).unwrap().max_depth, 2);
}

#[test]
fn test_load_missing_file() {
    let err = Config::load("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_expander_base_dir_resolution() {
    let cwd = Path::new("/work");

    let expander = Config::default().expander(cwd).unwrap();
    assert_eq!(expander.base_dir(), Path::new("/work"));

    let config = Config {
        base_dir: Some(PathBuf::from("prompts")),
        ..Config::default()
    };
    assert_eq!(
        config.expander(cwd).unwrap().base_dir(),
        Path::new("/work/prompts")
    );

    let config = Config {
        base_dir: Some(PathBuf::from("/elsewhere")),
        ..Config::default()
    };
    assert_eq!(
        config.expander(cwd).unwrap().base_dir(),
        Path::new("/elsewhere")
    );
}

#[test]
fn test_loader_carries_depth_and_delimiter() {
    let config = Config {
        max_depth: 7,
        file_delimiter: Some("# {filename}".to_string()),
        base_dir: None,
    };
    let loader = config.loader(Path::new("/work")).unwrap();

    assert_eq!(loader.max_depth(), 7);
    assert_eq!(
        loader.expander().file_delimiter().map(|d| d.as_str()),
        Some("# {filename}")
    );
}
