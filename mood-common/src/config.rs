//! TOML configuration loading
//!
//! Bootstrap settings for the mood service. Every field has a built-in
//! default so an empty (or missing) file is a valid configuration.
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)
//!
//! Levels 1 and 2 are applied by the binary on top of [`TomlConfig`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::classifier::MoodPolicy;
use crate::{Error, Result};

/// Origin wildcard accepted in `cors.allowed_origins`
pub const ANY_ORIGIN: &str = "*";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on a single scoring call (no limit when absent)
    #[serde(default)]
    pub scoring_timeout_ms: Option<u64>,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub classifier: MoodPolicy,
}

/// Cross-origin policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec![ANY_ORIGIN.to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            scoring_timeout_ms: None,
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            classifier: MoodPolicy::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CorsConfig {
    /// True when any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl TomlConfig {
    /// Parse TOML text and validate the result
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;

        if self.scoring_timeout_ms == Some(0) {
            return Err(Error::Config(
                "scoring_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(Error::Config(
                "cors.allowed_origins must list at least one origin (use \"*\" for any)"
                    .to_string(),
            ));
        }

        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "logging.level must be one of {:?}, got {:?}",
                LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

/// Load configuration from an explicit file; a missing file is an error
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    TomlConfig::from_toml_str(&content)
}

/// Where the active configuration came from
///
/// Resolution happens before logging is initialized, so the caller logs
/// this once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File named on the command line or in the environment
    Explicit(PathBuf),
    /// File found at a platform default location
    DefaultLocation(PathBuf),
    /// No file found; built-in defaults in effect
    BuiltInDefaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::DefaultLocation(path) => Some(path),
            ConfigSource::BuiltInDefaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::DefaultLocation(path) => {
                write!(f, "{} (default location)", path.display())
            }
            ConfigSource::BuiltInDefaults => f.write_str("built-in defaults"),
        }
    }
}

/// Load configuration from `explicit` if given, else from the platform
/// default location, else fall back to built-in defaults
pub fn resolve_toml_config(explicit: Option<&Path>) -> Result<(TomlConfig, ConfigSource)> {
    resolve_with_default(explicit, default_config_path())
}

fn resolve_with_default(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Result<(TomlConfig, ConfigSource)> {
    if let Some(path) = explicit {
        let config = load_toml_config(path)?;
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    match default_path {
        Some(path) => Ok((load_toml_config(&path)?, ConfigSource::DefaultLocation(path))),
        None => Ok((TomlConfig::default(), ConfigSource::BuiltInDefaults)),
    }
}

/// First existing default config file for the platform
///
/// Tries `<config_dir>/mood/config.toml`, then `/etc/mood/config.toml` on
/// Linux.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("mood").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/mood/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
