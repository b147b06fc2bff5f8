//! App configuration (`~/.whiteorder/config.json`).
//!
//! Everything is optional: with no config file the app still serves the page
//! and the editor, it just can't reach the generative service.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment fallback for the API key, checked when the config file has
/// no `apiKey` entry.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the business description fed into the generation prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_context: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            business_context: None,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".whiteorder").join("config.json"))
}

/// Load configuration from the default location.
pub fn load_config() -> Result<Config, String> {
    let path = config_path().ok_or("Could not find home directory")?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Err(format!(
            "Config file not found at {}. Create it with: {{ \"apiKey\": \"...\" }}",
            path.display()
        ));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

/// The API key, from config first, then the environment.
pub fn resolve_api_key(config: &Config) -> Option<String> {
    config
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_parses_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.business_context.is_none());
    }

    #[test]
    fn full_config_parses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "apiKey": "secret",
                "model": "gemini-other",
                "businessContext": "una tienda de relojes"
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-other");
        assert_eq!(config.business_context.as_deref(), Some("una tienda de relojes"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");
        let err = load_config_from(&path).unwrap_err();
        assert!(err.contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn config_key_wins_when_present() {
        let config = Config {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&config).as_deref(), Some("from-config"));
    }

    #[test]
    fn empty_config_key_is_treated_as_absent() {
        // Falls through to the env var, which may or may not be set in the
        // test environment — only assert the config key didn't win.
        let config = Config {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert_ne!(resolve_api_key(&config).as_deref(), Some(""));
    }
}
