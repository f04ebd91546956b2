//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! The file is looked up at `--config`, then `./config.json`, then
//! `~/.invdash/config.json`. Unlike most settings it is not optional: without
//! a base URL there is nothing to show, so a missing or malformed file is a
//! startup error.

use log::{debug, info, warn};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse files)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(rename = "apiBaseURL")]
    pub api_base_url: Option<String>,
    pub api_token: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub message_timeout_ms: Option<u64>,
}

/// Values coming from command-line flags (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub refresh_interval_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 2000;

pub const ENV_API_BASE_URL: &str = "INVDASH_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "INVDASH_API_TOKEN";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: Url,
    pub api_token: String,
    pub refresh_interval: Duration,
    pub message_timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    Io(PathBuf, std::io::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    MissingBaseUrl,
    InvalidBaseUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(
                f,
                "could not find {}. Please create one with \"apiBaseURL\" and \"apiToken\"",
                path.display()
            ),
            ConfigError::Io(path, e) => write!(f, "could not read {}: {e}", path.display()),
            ConfigError::Json(e) => write!(f, "could not parse config: {e}"),
            ConfigError::Toml(e) => write!(f, "could not parse config: {e}"),
            ConfigError::MissingBaseUrl => write!(
                f,
                "apiBaseURL is required (config file or {ENV_API_BASE_URL})"
            ),
            ConfigError::InvalidBaseUrl(url) => {
                write!(f, "apiBaseURL is not a valid http(s) URL: {url}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Picks the config file: explicit path, else `./config.json`, else
/// `~/.invdash/config.json`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    config_path_in(explicit, Path::new(""), dirs::home_dir().as_deref())
}

/// Lookup relative to `cwd` and `home`. When nothing exists the local path is
/// returned so the error names the first place searched.
fn config_path_in(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }
    match home {
        Some(home) => {
            let fallback = home.join(".invdash").join(DEFAULT_CONFIG_FILE);
            if fallback.exists() { fallback } else { local }
        }
        None => local,
    }
}

/// Load and parse the config file at `path`.
///
/// `.toml` files are parsed as TOML with the same keys; everything else is
/// treated as JSON.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config = parse_config(path, &contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<FileConfig, ConfigError> {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        toml::from_str(contents).map_err(ConfigError::Toml)
    } else {
        serde_json::from_str(contents).map_err(ConfigError::Json)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FileConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FileConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Base URL: env → config, required
    let raw_url = env(ENV_API_BASE_URL)
        .or_else(|| config.api_base_url.clone())
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingBaseUrl)?;
    let api_base_url = Url::parse(raw_url.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
        .ok_or_else(|| ConfigError::InvalidBaseUrl(raw_url.clone()))?;

    // Token: env → config → empty
    let api_token = env(ENV_API_TOKEN)
        .or_else(|| config.api_token.clone())
        .unwrap_or_default();
    if api_token.is_empty() {
        warn!("No apiToken configured, requests will carry an empty bearer token");
    }

    // Refresh interval: CLI → config → default
    let refresh_secs = cli
        .refresh_interval_secs
        .or(config.refresh_interval_secs)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
        .max(1);

    let message_ms = config
        .message_timeout_ms
        .unwrap_or(DEFAULT_MESSAGE_TIMEOUT_MS);

    let resolved = ResolvedConfig {
        api_base_url,
        api_token,
        refresh_interval: Duration::from_secs(refresh_secs),
        message_timeout: Duration::from_millis(message_ms),
    };
    debug!(
        "Resolved config: base_url={}, refresh={:?}, message_timeout={:?}",
        resolved.api_base_url, resolved.refresh_interval, resolved.message_timeout
    );
    Ok(resolved)
}
