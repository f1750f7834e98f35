//! Chart figures
//!
//! Builds `plotly::Plot`s from monthly aggregates. A plot serializes to the
//! `{ data, layout }` shape Plotly's `react()` accepts, so the page script
//! hands it over unchanged.

use plotly::{common::Title, layout::Axis, Bar, Layout, Pie, Plot};

use super::aggregate::MonthlyAggregate;

/// Pie chart: one slice per month
pub fn pie_chart(title: &str, rows: &[MonthlyAggregate]) -> Plot {
    let (labels, values) = split_rows(rows);

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(values).labels(labels));
    plot.set_layout(Layout::new().title(Title::with_text(title)));
    plot
}

/// Bar chart: month on x, value on y
pub fn bar_chart(title: &str, rows: &[MonthlyAggregate], x_label: &str, y_label: &str) -> Plot {
    let (x, y) = split_rows(rows);

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(x, y));
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(title))
            .x_axis(Axis::new().title(Title::with_text(x_label)))
            .y_axis(Axis::new().title(Title::with_text(y_label))),
    );
    plot
}

fn split_rows(rows: &[MonthlyAggregate]) -> (Vec<String>, Vec<f64>) {
    rows.iter().map(|r| (r.month.clone(), r.value)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows() -> Vec<MonthlyAggregate> {
        vec![
            MonthlyAggregate { month: "February".to_string(), value: 2.0 },
            MonthlyAggregate { month: "January".to_string(), value: 6.0 },
        ]
    }

    #[test]
    fn test_pie_json_shape() {
        let value: Value = serde_json::to_value(pie_chart("Area", &rows())).unwrap();

        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["labels"], json!(["February", "January"]));
        assert_eq!(value["data"][0]["values"], json!([2.0, 6.0]));
        assert_eq!(value["layout"]["title"]["text"], "Area");
    }

    #[test]
    fn test_bar_json_shape() {
        let value: Value =
            serde_json::to_value(bar_chart("Pixels", &rows(), "Month", "Count")).unwrap();

        assert_eq!(value["data"][0]["type"], "bar");
        assert_eq!(value["data"][0]["x"], json!(["February", "January"]));
        assert_eq!(value["data"][0]["y"], json!([2.0, 6.0]));
        assert_eq!(value["layout"]["title"]["text"], "Pixels");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Month");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "Count");
    }

    #[test]
    fn test_to_json_matches_serde() {
        let plot = pie_chart("Area", &rows());
        let from_json: Value = serde_json::from_str(&plot.to_json()).unwrap();

        assert_eq!(from_json, serde_json::to_value(&plot).unwrap());
    }

    #[test]
    fn test_empty_chart_has_no_points() {
        let value: Value = serde_json::to_value(pie_chart("Empty", &[])).unwrap();
        assert_eq!(value["data"][0]["values"], json!([]));
    }
}
