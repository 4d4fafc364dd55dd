use std::path::{Path, PathBuf};

use tracing::debug;

use crate::client::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::shared::config::{config_dir, AppConfig, AppConfigBuilder, ConfigError, FileConfig};

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolved client configuration plus where its files live.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    dir: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from the standard places.
    ///
    /// `api_url` (a command-line override) wins over `CLOUDVAULT_API_URL`,
    /// which wins over `config.toml`, which wins over the built-in default.
    /// `no_persist` forces an in-memory token whatever the file says.
    pub fn load(api_url: Option<String>, no_persist: bool) -> Result<Self, ConfigError> {
        Self::load_from(config_dir(), api_url, no_persist)
    }

    /// Same as [`Config::load`] with an explicit config directory
    pub fn load_from(
        dir: Option<PathBuf>,
        api_url: Option<String>,
        no_persist: bool,
    ) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(url) = api_url {
            builder = builder.api_url(url);
        }
        if no_persist {
            builder = builder.persist_token(false);
        }
        let builder = builder.merge_env();
        let builder = match &dir {
            Some(dir) => {
                let path = dir.join(CONFIG_FILE_NAME);
                debug!(path = %path.display(), "reading config file");
                builder.merge_file(FileConfig::load(&path)?)
            }
            None => builder,
        };
        Self::with_builder(builder, dir)
    }

    pub fn with_builder(builder: AppConfigBuilder, dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
            dir,
        })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn into_app(self) -> AppConfig {
        self.app
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        self.app.endpoint_url(path)
    }

    /// Token storage matching `persist_token`. Without a config directory
    /// the token lives in memory only.
    pub fn token_store(&self) -> Box<dyn TokenStore> {
        match (&self.dir, self.app.persist_token) {
            (Some(dir), true) => Box::new(FileTokenStore::in_dir(dir)),
            _ => Box::new(MemoryTokenStore::default()),
        }
    }
}
