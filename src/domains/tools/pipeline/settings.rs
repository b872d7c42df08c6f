//! Per-call resolution of the remote API settings.
//!
//! Each field is resolved independently, first match wins:
//!
//! 1. the environment (`API_BASE_URL`, `API_BEARER_TOKEN` by default);
//! 2. the JSON settings file (`~/.api/config.json`), keys `baseURL` and
//!    `bearerToken`;
//! 3. otherwise the field stays unset.
//!
//! Nothing is cached. Empty values count as unset, and a missing or
//! malformed file simply contributes nothing.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::Result;
use crate::core::config::ApiSourcesConfig;
use crate::core::error::Error;

/// Settings file key for the base URL.
const FILE_BASE_URL_KEY: &str = "baseURL";

/// Settings file key for the bearer token.
const FILE_BEARER_TOKEN_KEY: &str = "bearerToken";

/// Settings file key for per-tool target path overrides.
const FILE_PATHS_KEY: &str = "paths";

/// Resolved connection settings for one tool invocation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL of the remote service, used verbatim as the URL prefix.
    pub base_url: Option<String>,

    /// Bearer credential sent in the `Authorization` header.
    pub bearer_token: Option<String>,

    /// Target path overrides keyed by tool name.
    pub path_overrides: HashMap<String, String>,
}

impl ApiSettings {
    /// Base URL and token, only when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.base_url.as_deref(), self.bearer_token.as_deref()) {
            (Some(base_url), Some(token)) => Some((base_url, token)),
            _ => None,
        }
    }

    /// The configured target path for `tool`, if overridden.
    pub fn path_override(&self, tool: &str) -> Option<&str> {
        self.path_overrides.get(tool).map(String::as_str)
    }

    /// Names of the missing required fields, for logging.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.is_none() {
            missing.push("base URL");
        }
        if self.bearer_token.is_none() {
            missing.push("bearer token");
        }
        missing
    }
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .field("path_overrides", &self.path_overrides)
            .finish()
    }
}

/// Reads [`ApiSettings`] from the environment and the settings file.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    base_url_env: String,
    bearer_token_env: String,
    config_file: Option<PathBuf>,
}

impl SettingsResolver {
    /// Create a resolver reading the given variables and file.
    pub fn new(
        base_url_env: impl Into<String>,
        bearer_token_env: impl Into<String>,
        config_file: Option<PathBuf>,
    ) -> Self {
        Self {
            base_url_env: base_url_env.into(),
            bearer_token_env: bearer_token_env.into(),
            config_file,
        }
    }

    /// Create a resolver from the server's start-time configuration.
    pub fn from_config(sources: &ApiSourcesConfig) -> Self {
        Self::new(
            sources.base_url_env.clone(),
            sources.bearer_token_env.clone(),
            sources.config_file.clone(),
        )
    }

    /// Resolve the settings now.
    pub fn resolve(&self) -> ApiSettings {
        let mut settings = ApiSettings {
            base_url: env_value(&self.base_url_env),
            bearer_token: env_value(&self.bearer_token_env),
            path_overrides: HashMap::new(),
        };

        let Some(file) = self.read_file() else {
            return settings;
        };

        if settings.base_url.is_none() {
            settings.base_url = string_value(&file, FILE_BASE_URL_KEY);
        }
        if settings.bearer_token.is_none() {
            settings.bearer_token = string_value(&file, FILE_BEARER_TOKEN_KEY);
        }
        if let Some(Value::Object(paths)) = file.get(FILE_PATHS_KEY) {
            settings.path_overrides = paths
                .iter()
                .filter_map(|(tool, path)| path.as_str().map(|p| (tool.clone(), p.to_string())))
                .collect();
        }

        settings
    }

    fn read_file(&self) -> Option<Map<String, Value>> {
        let path = self.config_file.as_deref()?;
        if !path.exists() {
            debug!("No API settings file at {}", path.display());
            return None;
        }

        match read_settings_file(path) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!("Ignoring API settings file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Default for SettingsResolver {
    fn default() -> Self {
        Self::from_config(&ApiSourcesConfig::default())
    }
}

fn read_settings_file(path: &Path) -> Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::config("settings file is not a JSON object")),
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn string_value(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
