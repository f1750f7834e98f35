//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::MonthOrder;
use crate::data::{DataSource, DEFAULT_DATASET_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the config was read from, if any
    #[serde(skip)]
    pub origin: Option<PathBuf>,

    /// Problems found while loading, kept until logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// URL or local path of the wildfire CSV
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_source() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl DataConfig {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }

    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Chart rendering options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartsConfig {
    #[serde(default)]
    pub month_order: MonthOrder,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
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
        config.origin = Some(path.to_path_buf());
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before the subscriber exists, so nothing is logged here. Files
    /// that fail to load are recorded in `warnings` and skipped.
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("wildfire-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        Self::load_first(config_paths.iter().flatten(), |key| std::env::var(key).ok())
    }

    fn load_first<'a, F>(paths: impl IntoIterator<Item = &'a PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut skipped = Vec::new();

        let mut config = paths
            .into_iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::load(path) {
                Ok(mut config) => {
                    config.origin = Some(path.clone());
                    Some(config)
                }
                Err(e) => {
                    skipped.push(format!("Ignoring config file: {}", e));
                    None
                }
            })
            .unwrap_or_default();

        config.warnings.extend(skipped);
        config.apply_overrides(lookup);
        config
    }

    /// Emit the load outcome; call once the subscriber is installed
    pub fn log_load_outcome(&self) {
        match &self.origin {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `WILDFIRE_*` overrides read through `lookup`
    ///
    /// Unparseable values leave the current setting and add a warning.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("WILDFIRE_DATA_SOURCE") {
            self.data.source = source;
        }

        if let Some(host) = lookup("WILDFIRE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WILDFIRE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(e) => self
                    .warnings
                    .push(format!("Ignoring WILDFIRE_PORT={:?}: {}", port, e)),
            }
        }

        if let Some(order) = lookup("WILDFIRE_MONTH_ORDER") {
            match order.parse() {
                Ok(o) => self.charts.month_order = o,
                Err(e) => self
                    .warnings
                    .push(format!("Ignoring WILDFIRE_MONTH_ORDER: {}", e)),
            }
        }

        if let Some(level) = lookup("WILDFIRE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WILDFIRE_LOG_FORMAT") {
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
    format!(
        r#"# Wildfire Dashboard Configuration
#
# Environment variables override these settings:
# - WILDFIRE_DATA_SOURCE
# - WILDFIRE_HOST
# - WILDFIRE_PORT
# - WILDFIRE_MONTH_ORDER
# - WILDFIRE_LOG_LEVEL
# - WILDFIRE_LOG_FORMAT

[data]
# URL (http/https) or local path of the wildfire CSV
source = "{source}"

# HTTP timeout when fetching the dataset (seconds)
fetch_timeout_secs = 30

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

[charts]
# Month order in both charts: lexical (by month name) or calendar
month_order = "lexical"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        source = DEFAULT_DATASET_URL
    )
}
