use std::fs;
use std::path::PathBuf;

use restroute::{Settings, SettingsError};
use serde_json::json;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_json_settings_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "settings.json",
        r#"{"environment": "development", "database": {"host": "localhost"}}"#,
    );

    let mut settings = Settings::new();
    settings.load(&path).unwrap();
    assert_eq!(settings.get("environment"), Some(&json!("development")));
    assert_eq!(
        settings.get("database"),
        Some(&json!({"host": "localhost"}))
    );
    assert!(settings.get("missing").is_none());
}

#[test]
fn test_ini_settings_load() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "settings.ini",
        "environment = production\n\n[application]\nenvironment = development\n",
    );

    let mut settings = Settings::new();
    settings.load(&path).unwrap();
    assert_eq!(settings.get("environment"), Some(&json!("production")));
    assert_eq!(
        settings.get("application"),
        Some(&json!({"environment": "development"}))
    );
}

#[test]
fn test_first_load_wins_on_key_collision() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "a.json", r#"{"x": "from-a", "only_a": 1}"#);
    let second = write_file(&dir, "b.json", r#"{"x": "from-b", "only_b": 2}"#);

    let mut settings = Settings::new();
    settings.load(&first).unwrap();
    settings.load(&second).unwrap();

    assert_eq!(settings.get("x"), Some(&json!("from-a")));
    assert_eq!(settings.get("only_a"), Some(&json!(1)));
    assert_eq!(settings.get("only_b"), Some(&json!(2)));
}

#[test]
fn test_first_load_wins_across_formats() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "a.ini", "environment = staging\n");
    let second = write_file(&dir, "b.json", r#"{"environment": "production"}"#);

    let mut settings = Settings::new();
    settings.load(&first).unwrap();
    settings.load(&second).unwrap();
    assert_eq!(settings.get("environment"), Some(&json!("staging")));
}

#[test]
fn test_missing_file_is_config_load_error() {
    let dir = TempDir::new().unwrap();
    let mut settings = Settings::new();
    let err = settings.load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::ConfigLoad { .. }));
}

#[test]
fn test_unsupported_extension_is_config_format_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "settings.yaml", "environment: development");
    let mut settings = Settings::new();
    let err = settings.load(&path).unwrap_err();
    match err {
        SettingsError::ConfigFormat { extension, .. } => assert_eq!(extension, "yaml"),
        other => panic!("expected ConfigFormat, got {other:?}"),
    }
    // A rejected file contributes nothing to the store.
    assert!(settings.get("environment").is_none());
}

#[test]
fn test_malformed_json_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "settings.json", "[1, 2, 3]");
    let mut settings = Settings::new();
    let err = settings.load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Malformed { .. }));
}

#[test]
fn test_is_development_from_nested_application_key() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "settings.json",
        r#"{"application": {"environment": "development"}}"#,
    );
    let mut settings = Settings::new();
    settings.load(&path).unwrap();
    assert!(settings.is_development());
}

#[test]
fn test_is_development_from_top_level_key() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "settings.json", r#"{"environment": "development"}"#);
    let mut settings = Settings::new();
    settings.load(&path).unwrap();
    assert!(settings.is_development());
}

#[test]
fn test_container_options_in_production() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "settings.json", r#"{"environment": "production"}"#);
    let mut settings = Settings::new();
    settings.load(&path).unwrap();

    let options = settings.container_options();
    assert_eq!(options["displayErrorDetails"], json!(false));
    assert_eq!(options["determineRouteBeforeDispatch"], json!(true));
}

#[test]
fn test_container_options_explicit_settings_win() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "settings.json",
        r#"{
            "environment": "development",
            "containerSettings": {"displayErrorDetails": false, "cacheDir": "/tmp/di"}
        }"#,
    );
    let mut settings = Settings::new();
    settings.load(&path).unwrap();

    let options = settings.container_options();
    // Explicit containerSettings override the derived default.
    assert_eq!(options["displayErrorDetails"], json!(false));
    assert_eq!(options["cacheDir"], json!("/tmp/di"));
    assert_eq!(options["determineRouteBeforeDispatch"], json!(true));
}
