//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::analytics::AnalyticsConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset and view configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatasetConfig {
    /// JSON seed file; the built-in sample is used when unset
    #[serde(default)]
    pub seed_file: Option<String>,

    #[serde(default = "default_view_limit")]
    pub top_users_limit: usize,

    #[serde(default = "default_view_limit")]
    pub latest_posts_limit: usize,
}

fn default_view_limit() -> usize {
    5
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            top_users_limit: default_view_limit(),
            latest_posts_limit: default_view_limit(),
        }
    }
}

impl DatasetConfig {
    pub fn analytics(&self) -> AnalyticsConfig {
        AnalyticsConfig {
            top_users_limit: self.top_users_limit,
            latest_posts_limit: self.latest_posts_limit,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing config file among the default locations
    pub fn discover() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("socialify").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("SOCIALIFY_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("SOCIALIFY_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Dataset overrides
        if let Some(seed_file) = lookup("SOCIALIFY_SEED_FILE") {
            self.dataset.seed_file = Some(seed_file);
        }
        if let Some(limit) = lookup("SOCIALIFY_TOP_USERS_LIMIT") {
            if let Ok(n) = limit.parse() {
                self.dataset.top_users_limit = n;
            }
        }
        if let Some(limit) = lookup("SOCIALIFY_LATEST_POSTS_LIMIT") {
            if let Ok(n) = limit.parse() {
                self.dataset.latest_posts_limit = n;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SOCIALIFY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SOCIALIFY_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Socialify Configuration
#
# Environment variables override these settings:
# - SOCIALIFY_API_HOST
# - SOCIALIFY_API_PORT
# - SOCIALIFY_SEED_FILE
# - SOCIALIFY_TOP_USERS_LIMIT
# - SOCIALIFY_LATEST_POSTS_LIMIT
# - SOCIALIFY_LOG_LEVEL
# - SOCIALIFY_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8080

# Allowed CORS origins (empty = any origin)
cors_origins = []

[dataset]
# JSON seed file with users, posts and comments.
# The built-in sample data is served when unset.
# seed_file = "./seed.json"

# Entries in the top-users view
top_users_limit = 5

# Entries in the latest-posts view
latest_posts_limit = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
