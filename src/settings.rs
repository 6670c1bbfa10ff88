//! Process settings.
//!
//! An explicitly constructed store the host owns and threads through its
//! bootstrap: load one or more `.ini`/`.json` files, then read values while
//! routes are parsed and registered. Loading must finish before registration
//! starts; the store is treated as read-only afterward.
//!
//! Merging is first-load-wins at the top level: a key loaded earlier is
//! never overwritten by a later file. This lets a host load overrides first
//! and defaults last.

use std::fs;
use std::path::Path;

use ini::Ini;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::SettingsError;

/// Key under which a host declares explicit container settings.
const CONTAINER_SETTINGS: &str = "containerSettings";

#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a settings file and merge it into the store.
    ///
    /// `ini` sections become nested objects; section-less keys land at the
    /// top level. `json` files must hold an object. Existing keys win over
    /// newly loaded ones.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, SettingsError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let loaded = match extension.as_str() {
            "ini" => {
                let content = fs::read_to_string(path).map_err(|_| SettingsError::ConfigLoad {
                    path: path.to_path_buf(),
                })?;
                parse_ini(&content, path)?
            }
            "json" => {
                let content = fs::read_to_string(path).map_err(|_| SettingsError::ConfigLoad {
                    path: path.to_path_buf(),
                })?;
                parse_json(&content, path)?
            }
            other => {
                // Extension is rejected even for missing files, except that a
                // missing file is reported first, matching the load order.
                if !path.exists() {
                    return Err(SettingsError::ConfigLoad {
                        path: path.to_path_buf(),
                    });
                }
                return Err(SettingsError::ConfigFormat {
                    path: path.to_path_buf(),
                    extension: other.to_string(),
                });
            }
        };

        debug!(path = %path.display(), keys = loaded.len(), "settings file loaded");
        self.add_settings(loaded);
        Ok(self)
    }

    /// Merge a pre-built map into the store, existing keys winning.
    pub fn add_settings(&mut self, settings: Map<String, Value>) {
        for (key, value) in settings {
            self.values.entry(key).or_insert(value);
        }
    }

    /// Look up a top-level setting.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the environment is `"development"`, read from
    /// `application.environment` or the top-level `environment` key.
    #[must_use]
    pub fn is_development(&self) -> bool {
        let application_env = self
            .get("application")
            .and_then(|v| v.get("environment"))
            .and_then(Value::as_str);
        let top_env = self.get("environment").and_then(Value::as_str);
        application_env == Some("development") || top_env == Some("development")
    }

    /// Derive the DI-container bootstrap settings.
    ///
    /// Defaults (`displayErrorDetails` from [`Settings::is_development`],
    /// `determineRouteBeforeDispatch` always true) are merged underneath the
    /// host's explicit `containerSettings`; explicit keys win.
    #[must_use]
    pub fn container_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert(
            "displayErrorDetails".to_string(),
            Value::Bool(self.is_development()),
        );
        options.insert(
            "determineRouteBeforeDispatch".to_string(),
            Value::Bool(true),
        );
        if let Some(Value::Object(explicit)) = self.get(CONTAINER_SETTINGS) {
            for (key, value) in explicit {
                options.insert(key.clone(), value.clone());
            }
        }
        options
    }
}

fn parse_json(content: &str, path: &Path) -> Result<Map<String, Value>, SettingsError> {
    let value: Value = serde_json::from_str(content).map_err(|e| SettingsError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SettingsError::Malformed {
            path: path.to_path_buf(),
            detail: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn parse_ini(content: &str, path: &Path) -> Result<Map<String, Value>, SettingsError> {
    let ini = Ini::load_from_str(content).map_err(|e| SettingsError::Malformed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut map = Map::new();
    for (section, properties) in ini.iter() {
        match section {
            None => {
                for (key, value) in properties.iter() {
                    map.insert(key.to_string(), Value::String(value.to_string()));
                }
            }
            Some(name) => {
                let mut nested = Map::new();
                for (key, value) in properties.iter() {
                    nested.insert(key.to_string(), Value::String(value.to_string()));
                }
                map.insert(name.to_string(), Value::Object(nested));
            }
        }
    }
    Ok(map)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_add_settings_keeps_existing_keys() {
        let mut settings = Settings::new();
        settings.add_settings(map(json!({"x": "first"})));
        settings.add_settings(map(json!({"x": "second", "y": "only"})));
        assert_eq!(settings.get("x"), Some(&json!("first")));
        assert_eq!(settings.get("y"), Some(&json!("only")));
    }

    #[test]
    fn test_ini_sections_become_nested_objects() {
        let parsed = parse_ini(
            "environment = development\n[database]\nhost = localhost\n",
            Path::new("settings.ini"),
        )
        .unwrap();
        assert_eq!(parsed["environment"], json!("development"));
        assert_eq!(parsed["database"]["host"], json!("localhost"));
    }

    #[test]
    fn test_container_options_defaults_yield_to_explicit() {
        let mut settings = Settings::new();
        settings.add_settings(map(json!({
            "environment": "production",
            "containerSettings": {"displayErrorDetails": true, "cacheDir": "/tmp"}
        })));
        let options = settings.container_options();
        assert_eq!(options["displayErrorDetails"], json!(true));
        assert_eq!(options["determineRouteBeforeDispatch"], json!(true));
        assert_eq!(options["cacheDir"], json!("/tmp"));
    }
}
