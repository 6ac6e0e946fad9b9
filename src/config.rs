//! Flat `key = value` configuration files.
//!
//! The format is deliberately tiny: one pair per line, split on the first `=`,
//! surrounding whitespace and double quotes removed from the value. Lines without
//! an `=` are skipped, so stray text or comment-like lines never abort a load.
//! Every value stays a `String`; callers such as [`ServerConfig`] do their own
//! conversions.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::AppError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Parses configuration text into a flat map.
///
/// Duplicate keys are resolved last-write-wins. Never fails; empty input gives
/// an empty map.
pub fn parse_toml(content: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for line in content.trim().split('\n') {
        if let Some((key, value)) = line.split_once('=') {
            result.insert(
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            );
        }
    }
    result
}

/// Reads the file at `path` and parses it with [`parse_toml`].
///
/// A missing or unreadable file is returned as `AppError::Io`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, AppError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        warn!("failed to read config file {}: {}", path.display(), e);
        AppError::Io(format!("{}: {}", path.display(), e))
    })?;
    let config = parse_toml(&content);
    debug!("loaded {} config keys from {}", config.len(), path.display());
    Ok(config)
}

/// Returns the environment variable `name`, or `default` when unset or not unicode.
pub fn get_env_var(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Looks up a required key, reporting its absence as `AppError::Config`.
pub fn require<'a>(config: &'a HashMap<String, String>, key: &str) -> Result<&'a str, AppError> {
    config
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| AppError::Config(format!("missing key `{}`", key)))
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Builds the server settings from `server_host` / `server_port` in the parsed
    /// file, then `SERVER_HOST` / `SERVER_PORT`, then the built-in defaults.
    pub fn from_config(config: &HashMap<String, String>) -> Result<Self, AppError> {
        let host = match config.get("server_host") {
            Some(host) => host.clone(),
            None => get_env_var("SERVER_HOST", DEFAULT_HOST),
        };
        let port = match config.get("server_port") {
            Some(port) => port.clone(),
            None => get_env_var("SERVER_PORT", DEFAULT_PORT),
        };
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("server_port `{}` is not a port: {}", port, e)))?;

        Ok(Self { host, port })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
