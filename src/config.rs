use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

const CONFIG_PATH_VAR: &str = "ALBUMS_CONFIG";
const ENV_PREFIX: &str = "ALBUMS";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `ALBUMS_CONFIG`, falling back to `config.toml`.
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Some(Path::new(&config_path)))
    }

    /// Load configuration from an optional file, then overlay `ALBUMS_*` variables.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                builder = builder.add_source(config::File::from(PathBuf::from(path)));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> Result<String> {
        let host = self.server.host.trim();
        if host.is_empty() {
            bail!("server.host must be specified");
        }
        Ok(format!("{}:{}", host, self.server.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
