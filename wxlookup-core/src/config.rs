use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{model::UnitMode, provider::OpenWeatherClient, provider::openweather::DEFAULT_BASE_URL};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_CITY: &str = "Abuja";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Abuja"
/// unit = "imperial"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    /// City searched automatically on startup.
    pub default_city: String,
    pub unit: UnitMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            unit: UnitMode::default(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxlookup", "wxlookup")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace the stored key with `key` when it is present and non-blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Build the weather client from the configured key and base URL.
    pub fn client(&self) -> Result<OpenWeatherClient> {
        let api_key = self.api_key().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `wxlookup configure` or set {API_KEY_ENV}."
            )
        })?;

        Ok(OpenWeatherClient::with_base_url(api_key.to_owned(), &self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_behaviour() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city, "Abuja");
        assert_eq!(cfg.unit, UnitMode::Metric);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn client_errors_when_api_key_missing() {
        let err = Config::default().client().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `wxlookup configure`"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = Config { api_key: Some("   ".into()), ..Config::default() };
        assert!(cfg.client().is_err());
    }

    #[test]
    fn client_uses_configured_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: "http://127.0.0.1:8080".into(),
            ..Config::default()
        };
        let client = cfg.client().expect("client must build");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn env_override_wins_over_file_value() {
        let cfg = Config { api_key: Some("FILE".into()), ..Config::default() };

        let overridden = cfg.clone().with_api_key_override(Some("ENV".into()));
        assert_eq!(overridden.api_key(), Some("ENV"));

        let untouched = cfg.clone().with_api_key_override(Some("  ".into()));
        assert_eq!(untouched.api_key(), Some("FILE"));

        let untouched = cfg.with_api_key_override(None);
        assert_eq!(untouched.api_key(), Some("FILE"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            api_key: Some("KEY".into()),
            default_city: "Lagos".into(),
            unit: UnitMode::Imperial,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "unit = \"imperial\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.unit, UnitMode::Imperial);
        assert_eq!(cfg.default_city, "Abuja");
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "unit = \"kelvin\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
