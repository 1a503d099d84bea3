//! Order API configuration module.
//!
//! Configuration is read from an optional `configurator.toml` (any format the
//! `config` crate recognises by extension) in the working directory, with
//! fallback to defaults.
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//!
//! [[components]]
//! code = "A"
//! name = "LED Screen"
//! category = "Screen"
//! price_cents = 1028
//! ```

use config::{Config, File, FileFormat};
use configurator_core::{Catalog, Component, ValidationError};
use serde::Deserialize;

/// Base name of the configuration file.
pub const CONFIG_FILE: &str = "configurator";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: i64 = 5000;
const DEFAULT_MAX_BODY_BYTES: i64 = 16 * 1024;

/// Order API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Catalog entries; empty means the built-in reference catalog
    #[serde(default)]
    pub components: Vec<Component>,
}

impl ServerConfig {
    /// Load configuration from `configurator.*` if present.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from TOML text.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::build(File::from_str(toml, FileFormat::Toml))
    }

    fn build<S>(source: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: ServerConfig = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT)?
            .set_default("max_body_bytes", DEFAULT_MAX_BODY_BYTES)?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        if config.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }
        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("max_body_bytes".to_string()));
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the catalog orders are validated against.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.components.is_empty() {
            return Ok(Catalog::reference());
        }
        Ok(Catalog::new(self.components.iter().cloned())?)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid catalog entry: {0}")]
    Catalog(#[from] ValidationError),
}
