//! Region/year callback
//!
//! Pure function from a selection to both dashboard figures. It reads the
//! shared dataset and keeps nothing between calls.

use plotly::Plot;
use serde::Serialize;

use super::aggregate::{monthly_mean, Metric, MonthOrder};
use super::chart::{bar_chart, pie_chart};
use crate::data::{FireDataset, FireRecord};

/// Contents for both chart containers, always replaced together
#[derive(Clone, Serialize)]
pub struct DashboardFigures {
    /// Monthly average estimated fire area (pie)
    pub plot1: Plot,
    /// Monthly average fire pixel count (bar)
    pub plot2: Plot,
}

pub fn fire_area_title(region: &str, year: Option<i32>) -> String {
    format!(
        "{} : Monthly Average Estimated Fire Area in {}",
        region,
        display_year(year)
    )
}

pub fn pixel_count_title(region: &str, year: Option<i32>) -> String {
    format!(
        "{} : Average Count of Pixels for Presumed Vegetation Fires in {}",
        region,
        display_year(year)
    )
}

/// A cleared year selector renders as "None"
fn display_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "None".to_string())
}

/// Filter to `region`/`year`, average both metrics by month, build both charts
///
/// Unknown regions or years produce figures with empty series.
pub fn region_year_display(
    dataset: &FireDataset,
    region: &str,
    year: Option<i32>,
    order: MonthOrder,
) -> DashboardFigures {
    let selected: Vec<&FireRecord> = dataset.select(region, year).collect();

    tracing::debug!(
        region = %region,
        year = ?year,
        rows = selected.len(),
        "Rendering dashboard figures"
    );

    let area = monthly_mean(selected.iter().copied(), Metric::EstimatedFireArea, order);
    let pixels = monthly_mean(selected.iter().copied(), Metric::Count, order);

    DashboardFigures {
        plot1: pie_chart(&fire_area_title(region, year), &area),
        plot2: bar_chart(
            &pixel_count_title(region, year),
            &pixels,
            "Month",
            Metric::Count.column(),
        ),
    }
}
