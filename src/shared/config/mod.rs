//! Application configuration module
//!
//! Provides configuration types for the client. Values are layered:
//! built-in defaults, then the optional TOML file, then the environment,
//! then whatever the caller sets on the builder last.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "CLOUDVAULT_API_URL";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API base URL, without a trailing slash
    pub api_url: Url,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Whether the bearer token is written to disk between runs
    pub persist_token: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: parse_api_url(DEFAULT_API_URL).expect("default API url is valid"),
            timeout: None,
            persist_token: true,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.api_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::InvalidUrl(format!(
                    "{} (unsupported scheme '{}')",
                    self.api_url, other
                )))
            }
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Full URL for an API path such as `/files/search/user`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// On-disk configuration (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub persist_token: Option<bool>,
}

impl FileConfig {
    /// Load from a TOML file. A missing file yields the empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).map_err(|e| match e {
                ConfigError::Parse { message, .. } => ConfigError::Parse {
                    path: Some(path.to_path_buf()),
                    message,
                },
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_url: Option<String>,
    timeout: Option<Duration>,
    persist_token: Option<bool>,
}

impl AppConfigBuilder {
    /// Set the API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn persist_token(mut self, persist: bool) -> Self {
        self.persist_token = Some(persist);
        self
    }

    /// Apply values from a config file, keeping anything already set.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if self.api_url.is_none() {
            self.api_url = file.api_url;
        }
        if self.timeout.is_none() {
            self.timeout = file.timeout_secs.map(Duration::from_secs);
        }
        if self.persist_token.is_none() {
            self.persist_token = file.persist_token;
        }
        self
    }

    /// Apply `CLOUDVAULT_API_URL` if it is set and nothing else set the URL.
    pub fn merge_env(mut self) -> Self {
        if self.api_url.is_none() {
            self.api_url = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_url = match self.api_url {
            Some(raw) => parse_api_url(&raw)?,
            None => parse_api_url(DEFAULT_API_URL)?,
        };
        let config = AppConfig {
            api_url,
            timeout: self.timeout,
            persist_token: self.persist_token.unwrap_or(true),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::MissingValue("api_url"));
    }
    Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl(format!("{} ({})", raw, e)))
}

/// Directory holding `config.toml` and the persisted token
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cloudvault"))
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
    #[error("failed to parse config{}: {message}", .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Parse { path: Option<PathBuf>, message: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
