//! Configuration loader
//!
//! Loads the gateway connection settings from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `VLXGATE_HOST`: Address or hostname of the gateway (optionally `host:port`)
//! - `VLXGATE_PASSWORD`: Gateway password
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./vlxgate.json` or `./vlxgate.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location
//!
//! Files hold two flat keys:
//!
//! ```toml
//! host = "192.168.0.20"
//! password = "velux123"
//! ```

use std::path::{Path, PathBuf};

use vlxgate_domain::{GatewayConfig, GatewayError, Result};

pub const HOST_ENV: &str = "VLXGATE_HOST";
pub const PASSWORD_ENV: &str = "VLXGATE_PASSWORD";

const CONFIG_FILE_NAMES: [&str; 4] = ["vlxgate.json", "vlxgate.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If either variable
/// is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `GatewayError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - `host` or `password` is missing or empty
pub fn load() -> Result<GatewayConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(host = %config.host, "Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `VLXGATE_HOST` and `VLXGATE_PASSWORD`
///
/// # Errors
/// Returns `GatewayError::Config` if a variable is missing or empty.
pub fn load_from_env() -> Result<GatewayConfig> {
    let host = env_var(HOST_ENV)?;
    let password = env_var(PASSWORD_ENV)?;

    GatewayConfig::new(host, password)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations (see
/// [`probe_config_paths`]). Format is detected by file extension.
///
/// # Errors
/// Returns `GatewayError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - `host` or `password` is missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<GatewayConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GatewayError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GatewayError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GatewayError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content, choosing the format by the
/// extension of `path`.
fn parse_config(contents: &str, path: &Path) -> Result<GatewayConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GatewayError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GatewayError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(GatewayError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent and grandparent,
/// then the directory of the running executable. Within each directory
/// `vlxgate.*` wins over `config.*` and JSON over TOML.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get a required, non-empty environment variable
///
/// # Errors
/// Returns `GatewayError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(GatewayError::Config(format!("Missing required environment variable: {key}"))),
    }
}
