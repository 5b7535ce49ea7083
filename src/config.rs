//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory and includes:
//! - The OMDb API key and endpoint
//! - HTTP request timeout
//! - Rating widget settings

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PopcornError, Result};

/// Environment variable holding the OMDb API key
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "POPCORN_CONFIG";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "api_key",
    "api_url",
    "request_timeout",
    "max_rating",
    "default_rating",
    "rating_messages",
];

/// Main configuration structure
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the movie database API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Number of stars in the rating widget (default: 10)
    #[serde(default = "default_max_rating")]
    pub max_rating: u8,

    /// Rating preselected when a detail panel opens (0 = none)
    #[serde(default)]
    pub default_rating: u8,

    /// One label per star, shown instead of the number when the count
    /// matches `max_rating`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_messages: Vec<String>,
}

fn default_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_rating() -> u8 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            request_timeout: default_request_timeout(),
            max_rating: default_max_rating(),
            default_rating: 0,
            rating_messages: Vec::new(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("max_rating", &self.max_rating)
            .field("default_rating", &self.default_rating)
            .field("rating_messages", &self.rating_messages)
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        directories::ProjectDirs::from("com", "popcorn", "popcorn")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("popcorn.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment or the config file
    pub fn api_key(&self) -> Option<String> {
        if let Ok(key) = env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            return Some(key);
        }

        self.api_key.clone().filter(|k| !k.is_empty())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    fn validate(&self) -> Result<()> {
        if self.max_rating == 0 || self.max_rating > 10 {
            return Err(PopcornError::Config(format!(
                "max_rating must be between 1 and 10, got {}",
                self.max_rating
            )));
        }
        if self.default_rating > self.max_rating {
            return Err(PopcornError::Config(format!(
                "default_rating {} exceeds max_rating {}",
                self.default_rating, self.max_rating
            )));
        }
        if self.request_timeout == 0 {
            return Err(PopcornError::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "api_key" => self.api_key.clone(),
            "api_url" => Some(self.api_url.clone()),
            "request_timeout" => Some(self.request_timeout.to_string()),
            "max_rating" => Some(self.max_rating.to_string()),
            "default_rating" => Some(self.default_rating.to_string()),
            "rating_messages" => {
                (!self.rating_messages.is_empty()).then(|| self.rating_messages.join(","))
            }
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a single value by key, validating the result
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" => self.api_key = Some(value.to_string()),
            "api_url" => {
                url::Url::parse(value)?;
                self.api_url = value.to_string();
            }
            "request_timeout" => self.request_timeout = parse_number(key, value)?,
            "max_rating" => self.max_rating = parse_number(key, value)?,
            "default_rating" => self.default_rating = parse_number(key, value)?,
            "rating_messages" => self.rating_messages = parse_list(value),
            _ => return Err(unknown_key(key)),
        }
        self.validate()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PopcornError::Config(format!("invalid value '{value}' for {key}")))
}

/// Comma-separated labels; an empty value clears the list
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn unknown_key(key: &str) -> PopcornError {
    PopcornError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
