//! Wildfire Dashboard
//!
//! The page and the logic behind it:
//!
//! - **layout**: Static element tree (title, selectors, chart containers)
//! - **callback**: `(dataset, region, year) → (pie, bar)`
//! - **aggregate**: Group-by-month mean
//! - **chart**: Pie and bar `plotly::Plot` builders
//!
//! # Flow
//!
//! ```text
//!   selector change → callback → filter → monthly mean ×2 → Plot ×2 → plot1/plot2
//! ```
//!
//! Nothing here touches the network or holds state; the HTTP layer in
//! [`crate::api`] is a thin dispatcher over these functions.

pub mod aggregate;
pub mod callback;
pub mod chart;
pub mod layout;

pub use aggregate::{monthly_mean, Metric, MonthOrder, MonthlyAggregate};
pub use callback::{fire_area_title, pixel_count_title, region_year_display, DashboardFigures};
pub use chart::{bar_chart, pie_chart};
pub use layout::{build_layout, Element, Layout, SelectOption};
