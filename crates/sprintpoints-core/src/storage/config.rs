//! TOML-based application configuration.
//!
//! Stores the starting point of every sprint form:
//! - Default sprint length and holiday days
//! - The story-point rate per engineer
//! - The platform set, with display metadata and default team inputs
//! - Output preferences for the CLI
//!
//! Configuration is stored at `~/.config/sprintpoints/config.toml`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::capacity::{
    CapacityCalculator, PlatformInput, SprintParameters, DEFAULT_BUSINESS_DAYS,
    DEFAULT_POINTS_PER_ENGINEER,
};
use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::platform::{builtin_platforms, PlatformProfile};

/// Sprint defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintConfig {
    #[serde(default = "default_business_days")]
    pub business_days: u32,
    #[serde(default)]
    pub holiday_days: u32,
    #[serde(default = "default_points_per_engineer")]
    pub points_per_engineer: u32,
}

/// How the CLI prints a computed sprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Show capacity columns next to story points in tables.
    #[serde(default = "default_true")]
    pub show_capacity: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/sprintpoints/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sprint: SprintConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Platforms in display order.
    #[serde(default = "builtin_platforms")]
    pub platforms: IndexMap<String, PlatformProfile>,
}

fn default_business_days() -> u32 {
    DEFAULT_BUSINESS_DAYS
}
fn default_points_per_engineer() -> u32 {
    DEFAULT_POINTS_PER_ENGINEER
}
fn default_true() -> bool {
    true
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            business_days: default_business_days(),
            holiday_days: 0,
            points_per_engineer: default_points_per_engineer(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_capacity: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprint: SprintConfig::default(),
            output: OutputConfig::default(),
            platforms: builtin_platforms(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .trim()
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config not found, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the key's type, or the result is not a usable configuration.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check the invariants the form relies on.
    pub fn validate(&self) -> Result<()> {
        if self.sprint.business_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "sprint.business_days".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.platforms.is_empty() {
            return Err(CoreError::Validation(ValidationError::EmptyPlatformSet));
        }
        // Edits address platforms as `<key>.<field>`.
        if let Some(key) = self
            .platforms
            .keys()
            .find(|key| key.as_str() == "sprint" || key.contains('.'))
        {
            return Err(ConfigError::InvalidValue {
                key: format!("platforms.{key}"),
                message: "platform keys must not be \"sprint\" or contain '.'".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Sprint parameters a fresh form starts from.
    pub fn parameters(&self) -> SprintParameters {
        SprintParameters::new(self.sprint.business_days, self.sprint.holiday_days)
    }

    pub fn calculator(&self) -> CapacityCalculator {
        CapacityCalculator::with_rate(self.sprint.points_per_engineer)
    }

    /// Default inputs per platform, in display order.
    pub fn platform_inputs(&self) -> IndexMap<String, PlatformInput> {
        self.platforms
            .iter()
            .map(|(key, profile)| (key.clone(), profile.default_input()))
            .collect()
    }
}
