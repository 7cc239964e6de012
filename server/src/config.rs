//! Server configuration loaded from `.env` and the process environment.

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `MONGODB_URI`. Required.
    pub mongodb_uri: String,
    /// `MONGODB_DATABASE`
    pub mongodb_database: String,
    /// `MONGODB_COLLECTION`
    pub mongodb_collection: String,
    /// `LISTEN_HOST`
    pub listen_host: String,
    /// `PORT`
    pub port: u16,
    /// `LOG_LEVEL`, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// `LOG_FORMAT`
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: String::new(),
            mongodb_database: "golang_db".to_string(),
            mongodb_collection: "todos".to_string(),
            listen_host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl ServerConfig {
    /// Load `.env` from the working directory if present, then read the
    /// process environment. Returns the `.env` path that was loaded, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        let dotenv = dotenvy::dotenv().ok();
        let config = Self::from_environment(config::Environment::default())?;
        Ok((config, dotenv))
    }

    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(env.try_parsing(true).ignore_empty(true))
            .build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.mongodb_uri.trim().is_empty() {
            bail!("MONGODB_URI must be set");
        }
        if config.log_level.trim().is_empty() {
            config.log_level = "info".to_string();
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }
}
