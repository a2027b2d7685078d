//! HTTP Server Configuration
//!
//! Host and port for the HTTP server, with environment overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default port when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable overriding the port
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the bind host
pub const HOST_ENV: &str = "COURSECART_HOST";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but does not parse as a port number
    #[error("Invalid PORT value '{0}': expected a number between 1 and 65535")]
    InvalidPort(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Build from the environment: `PORT` and `COURSECART_HOST`
    ///
    /// Unset variables fall back to the defaults; a present but malformed
    /// `PORT` is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(PORT_ENV) {
            config.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        if let Ok(host) = std::env::var(HOST_ENV) {
            config.host = host;
        }

        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
