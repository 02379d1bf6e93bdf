//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CARTEVV_PORT` (or `PORT`): HTTP port, required for env loading
//! - `CARTEVV_HOST`: Bind host
//! - `CARTEVV_ALLOWED_ORIGINS`: Comma-separated CORS origins
//! - `CARTEVV_RESOLVER_USER_AGENT`: User agent sent when following links
//! - `CARTEVV_RESOLVER_MAX_REDIRECTS`: Redirects followed per link
//! - `CARTEVV_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./cartevv.json` or `./cartevv.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use cartevv_domain::{CartevvError, Config, LoggingConfig, ResolverConfig, Result, ServerConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the port is not
/// set there, falls back to loading from a config file.
///
/// # Errors
/// Returns `CartevvError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only the port is required; every other field falls back to its default.
///
/// # Errors
/// Returns `CartevvError::Config` if the port is missing or any variable
/// has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let port = env_var("CARTEVV_PORT").or_else(|_| env_var("PORT")).and_then(|s| {
        s.parse::<u16>().map_err(|e| CartevvError::Config(format!("Invalid port: {}", e)))
    })?;

    let server_defaults = ServerConfig::default();
    let host = std::env::var("CARTEVV_HOST").unwrap_or(server_defaults.host);
    let allowed_origins =
        env_list("CARTEVV_ALLOWED_ORIGINS").unwrap_or(server_defaults.allowed_origins);

    let resolver_defaults = ResolverConfig::default();
    let user_agent =
        std::env::var("CARTEVV_RESOLVER_USER_AGENT").unwrap_or(resolver_defaults.user_agent);
    let max_redirects = match std::env::var("CARTEVV_RESOLVER_MAX_REDIRECTS") {
        Ok(s) => s.parse::<usize>().map_err(|e| {
            CartevvError::Config(format!("Invalid resolver max redirects: {}", e))
        })?,
        Err(_) => resolver_defaults.max_redirects,
    };

    let json = env_bool("CARTEVV_LOG_JSON", false);

    Ok(Config {
        server: ServerConfig { host, port, allowed_origins },
        resolver: ResolverConfig { user_agent, max_redirects },
        logging: LoggingConfig { json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CartevvError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CartevvError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CartevvError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CartevvError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CartevvError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CartevvError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CartevvError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("cartevv.json"),
        dir.join("cartevv.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `CartevvError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CartevvError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

/// Parse a comma-separated list, dropping empty entries.
///
/// Returns `None` when the variable is unset.
fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|s| {
        s.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
    })
}
