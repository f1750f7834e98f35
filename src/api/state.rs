//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::dashboard::{build_layout, Layout, MonthOrder};
use crate::data::FireDataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Wildfire records, loaded once and never mutated
    pub dataset: Arc<FireDataset>,
    /// Page layout, built once from the dataset
    pub layout: Arc<Layout>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<FireDataset>, config: ApiConfig) -> Self {
        let layout = Arc::new(build_layout(&dataset));
        Self {
            dataset,
            layout,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Month ordering used by the chart callback
    pub month_order: MonthOrder,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            month_order: MonthOrder::default(),
        }
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            month_order: config.charts.month_order,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_from_config() {
        let mut config = Config::default();
        config.server.port = 9000;
        config.charts.month_order = MonthOrder::Calendar;

        let api = ApiConfig::from(&config);
        assert_eq!(api.addr(), "127.0.0.1:9000");
        assert_eq!(api.month_order, MonthOrder::Calendar);
    }

    #[test]
    fn test_new_overrides_host_and_port() {
        let api = ApiConfig::new("0.0.0.0", 8080);
        assert_eq!(api.addr(), "0.0.0.0:8080");
        assert_eq!(api.month_order, MonthOrder::Lexical);
    }
}
