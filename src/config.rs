use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::services::match_client::{DEFAULT_BASE_URL, DEFAULT_ORIGIN};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unset means requests never time out
    pub timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_origin() -> String { DEFAULT_ORIGIN.to_string() }
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MATCH_)
    /// 5. MATCH_SERVER_URL for the origin
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCH__CLIENT__BASE_URL -> client.base_url
            .add_source(env_source())
            .build()?;

        override_from_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        override_from_env(settings)?.try_deserialize()
    }

    /// Parse configuration from an inline TOML document, ignoring the environment
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed MATCH_SERVER_URL shortcut on top of the layered sources
fn override_from_env(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("MATCH_SERVER_URL") {
        Ok(origin) => Config::builder()
            .add_source(settings)
            .set_override("client.origin", origin)?
            .build(),
        Err(_) => Ok(settings),
    }
}
