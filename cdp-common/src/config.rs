//! Bootstrap configuration loading
//!
//! Configuration file resolution priority:
//! 1. Explicit path passed by the host process (highest priority)
//! 2. Environment variable naming a file
//! 3. `<user config dir>/<app>/config.toml`
//! 4. Built-in defaults (fallback)
//!
//! Only deployment concerns live here. Municipality behavior (patterns,
//! client id, timezone) is compiled into each adapter.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Default Cablecast API root for the Ann Arbor community television network
pub const DEFAULT_CABLECAST_BASE_URL: &str = "https://reflect-ctn.cablecast.tv/CablecastAPI/v1";

/// Saved show search returning government meetings broadcast in the last ~40 days
pub const DEFAULT_SAVED_SEARCH_ID: u64 = 1187;

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Video catalog endpoints (optional)
    #[serde(default)]
    pub cablecast: CablecastConfig,

    /// Path to the static known-persons JSON file
    ///
    /// Default: `annarbor-static.json` in the working directory
    #[serde(default)]
    pub static_data_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Cablecast video catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CablecastConfig {
    /// API root, without trailing slash
    #[serde(default = "default_cablecast_base_url")]
    pub base_url: String,

    /// Saved search used for the last-resort show lookup
    #[serde(default = "default_saved_search_id")]
    pub saved_search_id: u64,

    /// Upper bound on show ids inspected by the last-resort lookup
    #[serde(default = "default_max_search_candidates")]
    pub max_search_candidates: usize,

    /// Request timeout; transport defaults apply when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CablecastConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for CablecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_cablecast_base_url(),
            saved_search_id: default_saved_search_id(),
            max_search_candidates: default_max_search_candidates(),
            timeout_secs: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cablecast_base_url() -> String {
    DEFAULT_CABLECAST_BASE_URL.to_string()
}

fn default_saved_search_id() -> u64 {
    DEFAULT_SAVED_SEARCH_ID
}

fn default_max_search_candidates() -> usize {
    100
}

impl TomlConfig {
    /// Resolve and load configuration following the priority order above
    ///
    /// An absent file falls through to defaults; a file that exists but does
    /// not parse is an error.
    pub fn resolve(explicit: Option<&Path>, env_var_name: &str, app_name: &str) -> Result<Self> {
        match resolve_config_path(explicit, env_var_name, app_name) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                load_toml_config(&path)
            }
            None => {
                debug!("No configuration file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Static data file path, or the built-in default
    pub fn static_data_path(&self) -> PathBuf {
        self.static_data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("annarbor-static.json"))
    }
}

/// Locate the configuration file, if any
///
/// Explicit and environment paths are returned even when missing so that a
/// typo surfaces as an error instead of silently using defaults.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_var_name: &str,
    app_name: &str,
) -> Option<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: User config directory
    dirs::config_dir()
        .map(|d| d.join(app_name).join("config.toml"))
        .filter(|p| p.exists())
}

/// Parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config: TomlConfig = toml::from_str(&content)?;

    if config.cablecast.base_url.trim().is_empty() {
        return Err(Error::Config("cablecast.base_url must not be empty".to_string()));
    }

    Ok(config)
}
