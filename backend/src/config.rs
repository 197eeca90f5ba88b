//! Service configuration.
//!
//! Settings come from an optional `tzolkin.toml` file and are then overridden
//! by environment variables. Every field has a default, so the service starts
//! without any configuration at all.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [descriptions]
//! path = "data/descriptions.json"
//!
//! [generator]
//! enabled = true
//! base_url = "https://generativelanguage.googleapis.com"
//! model = "gemini-1.5-flash"
//! api_key_env = "GEMINI_API_KEY"
//! timeout_secs = 20
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub descriptions: DescriptionSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Location of the descriptions resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionSettings {
    #[serde(default = "default_descriptions_path")]
    pub path: PathBuf,
}

/// External interpretation generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_descriptions_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/descriptions.json"))
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DescriptionSettings {
    fn default() -> Self {
        Self {
            path: default_descriptions_path(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ServerSettings {
    /// `host:port` string suitable for parsing into a socket address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServiceConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `tzolkin.toml` from the first standard location that has one.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists anywhere.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("tzolkin.toml"),
            PathBuf::from("backend/tzolkin.toml"),
            PathBuf::from("../tzolkin.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Full startup resolution: `TZOLKIN_CONFIG` or the default file search,
    /// then built-in defaults, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("TZOLKIN_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override settings from process environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: bind address
    /// - `DESCRIPTIONS_PATH`: descriptions JSON file
    /// - `GENERATOR_ENABLED`: `true`/`false`
    /// - `GENERATOR_BASE_URL`, `GENERATOR_MODEL`, `GENERATOR_API_KEY_ENV`
    /// - `GENERATOR_TIMEOUT_SECS`
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override settings from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }
        if let Some(path) = lookup("DESCRIPTIONS_PATH") {
            self.descriptions.path = PathBuf::from(path);
        }
        if let Some(enabled) = lookup("GENERATOR_ENABLED") {
            self.generator.enabled = parse_value("GENERATOR_ENABLED", &enabled)?;
        }
        if let Some(base_url) = lookup("GENERATOR_BASE_URL") {
            self.generator.base_url = base_url;
        }
        if let Some(model) = lookup("GENERATOR_MODEL") {
            self.generator.model = model;
        }
        if let Some(api_key_env) = lookup("GENERATOR_API_KEY_ENV") {
            self.generator.api_key_env = api_key_env;
        }
        if let Some(timeout) = lookup("GENERATOR_TIMEOUT_SECS") {
            self.generator.timeout_secs = parse_value("GENERATOR_TIMEOUT_SECS", &timeout)?;
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        message: format!("'{}': {}", raw, e),
    })
}
