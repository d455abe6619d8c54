use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::prediction::api::{Endpoint, EndpointError};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: EndpointSettings,
    #[serde(default)]
    pub decorations: DecorationSettings,
}

/// Where predictions are requested from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Cosmetic effects that can be switched off without touching form behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSettings {
    /// Fade field groups in when a model is selected.
    #[serde(default = "default_true")]
    pub animations: bool,
    /// Show help text while certain fields have focus.
    #[serde(default = "default_true")]
    pub tooltips: bool,
    /// Highlight required fields as valid/invalid when they lose focus.
    #[serde(default = "default_true")]
    pub field_feedback: bool,
    /// Sparkles for noteworthy predictions.
    #[serde(default = "default_true")]
    pub celebrations: bool,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            animations: true,
            tooltips: true,
            field_feedback: true,
            celebrations: true,
        }
    }
}

impl DecorationSettings {
    pub fn disabled() -> Self {
        Self {
            animations: false,
            tooltips: false,
            field_feedback: false,
            celebrations: false,
        }
    }
}

impl AppConfig {
    /// Parse the configured endpoint.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        Endpoint::parse(&self.endpoint.base_url).map_err(|source| ConfigError::InvalidEndpoint {
            url: self.endpoint.base_url.clone(),
            source,
        })
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The configured endpoint is not a usable base URL.
    #[error("Invalid endpoint `{url}`: {source}")]
    InvalidEndpoint { url: String, source: EndpointError },
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let config = load_from(&path)?;
    tracing::info!(
        "Loaded config from {} (endpoint {})",
        path.display(),
        config.endpoint.base_url
    );
    Ok(config)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    config.endpoint()?;
    Ok(config)
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
