//! Configuration management for the MCP server.
//!
//! This is the start-time configuration: server identity, logging, transport
//! and *where* the API settings live. The API settings themselves (base URL,
//! bearer token) are resolved again on every tool call, see
//! [`crate::domains::tools::pipeline::SettingsResolver`].

use super::transport::TransportConfig;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable holding the remote service base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Environment variable holding the bearer credential.
pub const BEARER_TOKEN_ENV: &str = "API_BEARER_TOKEN";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Locations of the remote API settings.
    pub api: ApiSourcesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where the per-call API settings are read from.
///
/// Environment variables are consulted first, then the JSON file.
#[derive(Debug, Clone)]
pub struct ApiSourcesConfig {
    /// Name of the variable carrying the base URL.
    pub base_url_env: String,

    /// Name of the variable carrying the bearer token.
    pub bearer_token_env: String,

    /// JSON settings file, `~/.api/config.json` by default.
    /// `None` when no home directory can be determined.
    pub config_file: Option<PathBuf>,
}

impl ApiSourcesConfig {
    /// Default location of the settings file under the home directory.
    pub fn default_config_file() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".api").join("config.json"))
    }
}

impl ApiSourcesConfig {
    /// Log where the API settings will be read from.
    pub fn log_sources(&self) {
        info!(
            "API settings from ${} and ${}",
            self.base_url_env, self.bearer_token_env
        );
        match &self.config_file {
            Some(path) => info!("API settings file: {}", path.display()),
            None => warn!("No home directory found; API settings come from the environment only"),
        }
    }
}

impl Default for ApiSourcesConfig {
    fn default() -> Self {
        Self {
            base_url_env: BASE_URL_ENV.to_string(),
            bearer_token_env: BEARER_TOKEN_ENV.to_string(),
            config_file: Self::default_config_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "lexicon-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiSourcesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_`: `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ... A `.env` file in the working
    /// directory is loaded first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
