//! Configuration module for petits-plats
//!
//! Stores the default recipe file and browse preferences in the user's
//! config directory. A missing file means defaults; nothing is written
//! until the user changes a setting.

use crate::search::MIN_QUERY_LEN;
use crate::tags::DuplicatePolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by [`AppConfig::set`] and [`AppConfig::get`]
pub const KEYS: &[&str] = &[
    "recipes_file",
    "min_query_len",
    "duplicate_policy",
    "color",
    "quiet",
];

const fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Recipe collection to load instead of the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes_file: Option<PathBuf>,

    /// Shortest query that filters on text
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Whether a tag label may be active in two categories at once
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_file: None,
            min_query_len: MIN_QUERY_LEN,
            duplicate_policy: DuplicatePolicy::default(),
            color: true,
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("petits-plats").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Update one setting from its string form
    ///
    /// An empty value for `recipes_file` unsets it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "recipes_file" => {
                self.recipes_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "min_query_len" => {
                self.min_query_len = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for min_query_len: '{value}'. Use a positive number"
                    ))
                })?;
            }
            "duplicate_policy" => {
                self.duplicate_policy = match value {
                    "global" => DuplicatePolicy::Global,
                    "per-category" => DuplicatePolicy::PerCategory,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for duplicate_policy: '{value}'. Use 'global' or 'per-category'"
                        )));
                    }
                };
            }
            "color" => self.color = parse_bool(key, value)?,
            "quiet" => self.quiet = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Current value of one setting, as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        Ok(match key {
            "recipes_file" => self
                .recipes_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "min_query_len" => self.min_query_len.to_string(),
            "duplicate_policy" => match self.duplicate_policy {
                DuplicatePolicy::Global => "global".to_string(),
                DuplicatePolicy::PerCategory => "per-category".to_string(),
            },
            "color" => self.color.to_string(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(unknown_key(key)),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::Message(format!("Invalid value for {key}: '{value}'. Use 'true' or 'false'"))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.recipes_file.is_none());
        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Global);
        assert!(config.color);
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.set("recipes_file", "/tmp/recipes.json").unwrap();
        config.set("duplicate_policy", "per-category").unwrap();
        config.set("min_query_len", "2").unwrap();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert!(config.color);
        assert_eq!(config.min_query_len, 3);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = AppConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("min_query_len", "-1").is_err());
        assert!(config.set("duplicate_policy", "sometimes").is_err());
        assert!(config.set("database", "x").is_err());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let mut config = AppConfig::default();
        config.set("recipes_file", "data.json").unwrap();
        for key in KEYS {
            assert!(config.get(key).is_ok(), "{key}");
        }
        assert_eq!(config.get("recipes_file").unwrap(), "data.json");
        assert_eq!(config.get("duplicate_policy").unwrap(), "global");

        config.set("recipes_file", "").unwrap();
        assert!(config.recipes_file.is_none());
    }
}
