//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `knxha.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values.

use std::path::Path;

use knxha_app::settings::Settings;
use serde::Deserialize;

const DEFAULT_PATH: &str = "knxha.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project settings.
    pub project: ProjectConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Range names and naming conventions of the project.
    pub ranges: Settings,
}

/// Project configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Language the project is expected in.
    pub language: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path`, or from `knxha.toml` if present, then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, if the file
    /// is malformed, or if the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_optional_file(Path::new(DEFAULT_PATH))?,
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("KNXHA_LANGUAGE") {
            self.project.language = val;
        }
        if let Some(val) = var("KNXHA_LIGHTING_RANGE") {
            self.ranges.lighting_range = val;
        }
        if let Some(val) = var("KNXHA_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.project.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "project language must not be empty".to_string(),
            ));
        }
        if self.ranges.range_names().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "range names must not be empty".to_string(),
            ));
        }
        if self.ranges.light_name_suffixes.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "light name suffixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            language: "de-DE".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "knxha=info,knxha_app=info,knxha_adapter_project_json=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
