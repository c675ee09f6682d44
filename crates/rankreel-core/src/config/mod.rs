//! Configuration module for rankreel.
//!
//! Loads typed configuration from `~/.rankreel/config.json`.
//! Secrets may also come from the environment; see [`Config::apply_env`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `tools.rapidApi.apiKey`.
pub const RAPID_API_KEY_ENV: &str = "RAPID_API_KEY";

pub const DEFAULT_IMDB_BASE_URL: &str = "https://imdb-top-100-movies.p.rapidapi.com";
pub const DEFAULT_IMDB_HOST: &str = "imdb-top-100-movies.p.rapidapi.com";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
}

impl Config {
    /// Load configuration from the default path (`~/.rankreel/config.json`).
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the default config directory path.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rankreel")
    }

    /// Overlay secrets from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay secrets using `lookup` in place of the process environment.
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(RAPID_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.tools.rapid_api.api_key = key;
        }
        self
    }

    /// Check the configuration for values that will make tools fail.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let rapid = &self.tools.rapid_api;

        if rapid.api_key.trim().is_empty() || rapid.api_key.contains("YOUR_") {
            errors.push(format!(
                "RapidAPI key is missing or a placeholder. \
                 Set tools.rapidApi.apiKey in config.json or export {}.",
                RAPID_API_KEY_ENV
            ));
        }
        if rapid.imdb_base_url.trim().is_empty() {
            errors.push("tools.rapidApi.imdbBaseUrl is empty.".into());
        }
        if rapid.imdb_host.trim().is_empty() {
            errors.push("tools.rapidApi.imdbHost is empty.".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Write the default config template to disk.
    pub fn write_default_template() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        Self::write_template_to(&path)?;
        Ok(path)
    }

    /// Write the config template to `path`, creating parent directories.
    pub fn write_template_to(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = serde_json::json!({
            "tools": {
                "rapidApi": {
                    "apiKey": "YOUR_RAPIDAPI_KEY_HERE",
                    "imdbBaseUrl": DEFAULT_IMDB_BASE_URL,
                    "imdbHost": DEFAULT_IMDB_HOST
                }
            }
        });

        std::fs::write(path, serde_json::to_string_pretty(&template)?)?;
        Ok(())
    }
}

// ── Tools Configuration ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolsConfig {
    pub rapid_api: RapidApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RapidApiConfig {
    pub api_key: String,
    pub imdb_base_url: String,
    pub imdb_host: String,
}

impl Default for RapidApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            imdb_base_url: DEFAULT_IMDB_BASE_URL.into(),
            imdb_host: DEFAULT_IMDB_HOST.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tools.rapid_api.api_key.is_empty());
        assert_eq!(config.tools.rapid_api.imdb_base_url, DEFAULT_IMDB_BASE_URL);
        assert_eq!(config.tools.rapid_api.imdb_host, DEFAULT_IMDB_HOST);
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{"tools": {"rapidApi": {"apiKey": "test-key"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.tools.rapid_api.api_key, "test-key");
        assert_eq!(config.tools.rapid_api.imdb_host, DEFAULT_IMDB_HOST);
    }

    #[test]
    fn test_env_overrides_file_key() {
        let json = r#"{"tools": {"rapidApi": {"apiKey": "from-file"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        let config = config.apply_env_with(|k| (k == RAPID_API_KEY_ENV).then(|| "from-env".to_string()));
        assert_eq!(config.tools.rapid_api.api_key, "from-env");
    }

    #[test]
    fn test_blank_env_keeps_file_key() {
        let json = r#"{"tools": {"rapidApi": {"apiKey": "from-file"}}}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        let config = config.apply_env_with(|_| Some("  ".to_string()));
        assert_eq!(config.tools.rapid_api.api_key, "from-file");
    }

    #[test]
    fn test_validate() {
        let errors = Config::default().validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains(RAPID_API_KEY_ENV));

        let mut config = Config::default();
        config.tools.rapid_api.api_key = "real-key".into();
        assert!(config.validate().is_ok());

        config.tools.rapid_api.imdb_host.clear();
        assert_eq!(config.validate().unwrap_err().len(), 1);
    }

    #[test]
    fn test_template_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        Config::write_template_to(&path).unwrap();
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.tools.rapid_api.api_key, "YOUR_RAPIDAPI_KEY_HERE");
        assert_eq!(config.tools.rapid_api.imdb_base_url, DEFAULT_IMDB_BASE_URL);
        assert!(config.validate().is_err());
    }
}
