//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

/// Query string for `GET /api/v1/charts`
///
/// Values are passed to the callback as-is; unknown regions and years simply
/// produce empty charts. `year` is absent when the dropdown is cleared.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    pub region: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Number of loaded records
    pub records: usize,
    /// Number of distinct years in the dataset
    pub years: usize,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
