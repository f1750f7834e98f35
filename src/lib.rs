//! # Wildfire Dashboard
//!
//! Interactive dashboard over the historical Australian wildfire dataset.
//! Pick a region and a year to see the monthly average estimated fire area
//! (pie chart) and the monthly average fire pixel count (bar chart).
//!
//! ## Modules
//!
//! - [`data`]: CSV loading and the in-memory record set
//! - [`dashboard`]: Layout, chart callback, aggregation, figures
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wildfire_dashboard::dashboard::{region_year_display, MonthOrder};
//! use wildfire_dashboard::data::{DataSource, DatasetLoader};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(std::time::Duration::from_secs(30))?;
//!     let dataset = loader.load(&DataSource::default()).await?;
//!
//!     let figures = region_year_display(&dataset, "NSW", Some(2005), MonthOrder::Lexical);
//!     println!("{}", figures.plot1.to_json());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};

pub use dashboard::{
    build_layout, region_year_display, DashboardFigures, Layout, Metric, MonthOrder,
    MonthlyAggregate,
};

pub use data::{DataError, DataSource, DatasetLoader, FireDataset, FireRecord, Region};
