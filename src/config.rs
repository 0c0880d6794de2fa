//! Configuration handling for the example plugin
//!
//! Configuration is read from, in order of precedence:
//! 1. An explicit path (`--config` or `EXAMPLE_PLUGIN_CONFIG`)
//! 2. `config.toml` in the platform config directory
//!
//! A missing file means defaults; every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Greeting template style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GreetStyle {
    Formal,
    Casual,
    #[default]
    Friendly,
}

impl GreetStyle {
    /// Resolves a style tag; unrecognized tags fall back to friendly
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "formal" => GreetStyle::Formal,
            "casual" => GreetStyle::Casual,
            _ => GreetStyle::Friendly,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GreetStyle::Formal => "formal",
            GreetStyle::Casual => "casual",
            GreetStyle::Friendly => "friendly",
        }
    }
}

/// Defaults for the `greet` command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetConfig {
    /// Name used when none is given
    pub default_name: String,

    /// Style used when none is given
    pub default_style: GreetStyle,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            default_name: "Friend".to_string(),
            default_style: GreetStyle::Friendly,
        }
    }
}

/// Defaults for the `count` command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    /// Bound used when none is given
    pub default_max: i64,

    /// Largest bound; larger requests are clamped
    pub limit: i64,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            default_max: 5,
            limit: 100,
        }
    }
}

/// Console settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colorize console lines
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PluginConfig {
    pub greet: GreetConfig,
    pub count: CountConfig,
    pub console: ConsoleConfig,
}

impl PluginConfig {
    /// Returns the platform config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "voltmind", "example-plugin")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from an explicit path, or the default location
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::config_dir() {
                Some(dir) => Self::load_from(&dir.join("config.toml")),
                None => Ok(Self::default()),
            },
        }
    }

    /// Loads configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parses and validates TOML configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: PluginConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count.limit < 1 {
            return Err(ConfigError::Invalid(format!(
                "count.limit must be at least 1, got {}",
                self.count.limit
            )));
        }

        if self.count.default_max < 1 {
            return Err(ConfigError::Invalid(format!(
                "count.default_max must be at least 1, got {}",
                self.count.default_max
            )));
        }

        Ok(())
    }
}
