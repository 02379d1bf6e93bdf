//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_HOST, DEFAULT_MAX_REDIRECTS, DEFAULT_PORT, DEFAULT_USER_AGENT,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound link resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `0.0.0.0`.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

/// Outbound link resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// `User-Agent` header sent when following links.
    pub user_agent: String,
    /// Maximum number of redirects followed before giving up.
    pub max_redirects: usize,
}

/// Logging output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl ServerConfig {
    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| (*o).to_string()).collect(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { user_agent: DEFAULT_USER_AGENT.to_string(), max_redirects: DEFAULT_MAX_REDIRECTS }
    }
}
