//! Monthly aggregation
//!
//! Group-by-month mean over a filtered slice of records. Groups are keyed by
//! month name, so the default output order is lexical ("April", "August",
//! "December", ...) rather than calendar order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::FireRecord;

/// Numeric column to average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// `Estimated_fire_area`
    EstimatedFireArea,
    /// `Count` (fire pixels)
    Count,
}

impl Metric {
    /// Value of this metric for one record
    pub fn value(&self, record: &FireRecord) -> f64 {
        match self {
            Metric::EstimatedFireArea => record.estimated_fire_area,
            Metric::Count => record.count,
        }
    }

    /// Source column name
    pub fn column(&self) -> &'static str {
        match self {
            Metric::EstimatedFireArea => "Estimated_fire_area",
            Metric::Count => "Count",
        }
    }
}

/// Ordering of month groups in aggregate output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MonthOrder {
    /// Sorted by month name
    #[default]
    Lexical,
    /// January through December
    Calendar,
}

impl std::fmt::Display for MonthOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthOrder::Lexical => write!(f, "lexical"),
            MonthOrder::Calendar => write!(f, "calendar"),
        }
    }
}

impl std::str::FromStr for MonthOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexical" => Ok(MonthOrder::Lexical),
            "calendar" => Ok(MonthOrder::Calendar),
            _ => Err(format!(
                "Invalid month order: {}. Use lexical or calendar",
                s
            )),
        }
    }
}

/// Mean of one metric for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: String,
    pub value: f64,
}

#[derive(Default)]
struct MonthAccumulator {
    month_number: u32,
    sum: f64,
    count: usize,
}

/// Group records by month and average `metric` within each group
///
/// Months without records are absent from the output. An empty input gives
/// an empty output.
pub fn monthly_mean<'a, I>(records: I, metric: Metric, order: MonthOrder) -> Vec<MonthlyAggregate>
where
    I: IntoIterator<Item = &'a FireRecord>,
{
    let mut groups: BTreeMap<&'a str, MonthAccumulator> = BTreeMap::new();

    for record in records {
        let acc = groups.entry(record.month.as_str()).or_default();
        acc.month_number = record.month_number();
        acc.sum += metric.value(record);
        acc.count += 1;
    }

    let mut rows: Vec<(u32, MonthlyAggregate)> = groups
        .into_iter()
        .map(|(month, acc)| {
            (
                acc.month_number,
                MonthlyAggregate {
                    month: month.to_string(),
                    value: acc.sum / acc.count as f64,
                },
            )
        })
        .collect();

    if order == MonthOrder::Calendar {
        rows.sort_by_key(|(number, _)| *number);
    }

    rows.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    #[test]
    fn test_mean_per_month() {
        let dataset = sample_dataset();
        let rows: Vec<_> = dataset.select("NSW", Some(2005)).collect();

        let area = monthly_mean(rows.iter().copied(), Metric::EstimatedFireArea, MonthOrder::Lexical);
        assert_eq!(
            area,
            vec![
                MonthlyAggregate { month: "February".to_string(), value: 5.0 },
                MonthlyAggregate { month: "January".to_string(), value: (8.5 + 16.25) / 2.0 },
                MonthlyAggregate { month: "March".to_string(), value: 15.0 },
            ]
        );

        let count = monthly_mean(rows.iter().copied(), Metric::Count, MonthOrder::Lexical);
        let values: Vec<f64> = count.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![2.0, 6.0, 8.0]);
    }

    #[test]
    fn test_calendar_order() {
        let dataset = sample_dataset();

        let rows = monthly_mean(
            dataset.select("NSW", Some(2005)),
            Metric::Count,
            MonthOrder::Calendar,
        );
        let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["January", "February", "March"]);
    }

    #[test]
    fn test_mean_matches_direct_computation() {
        let dataset = sample_dataset();
        let rows: Vec<_> = dataset.select("NSW", Some(2005)).collect();

        for agg in monthly_mean(rows.iter().copied(), Metric::Count, MonthOrder::Lexical) {
            let in_month: Vec<f64> = rows
                .iter()
                .filter(|r| r.month == agg.month)
                .map(|r| r.count)
                .collect();
            let expected = in_month.iter().sum::<f64>() / in_month.len() as f64;
            assert_eq!(agg.value, expected);
        }
    }

    #[test]
    fn test_empty_input() {
        let rows = monthly_mean(std::iter::empty(), Metric::EstimatedFireArea, MonthOrder::Lexical);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_month_order_parse() {
        assert_eq!("calendar".parse::<MonthOrder>(), Ok(MonthOrder::Calendar));
        assert_eq!("LEXICAL".parse::<MonthOrder>(), Ok(MonthOrder::Lexical));
        assert!("random".parse::<MonthOrder>().is_err());
        assert_eq!(MonthOrder::default(), MonthOrder::Lexical);
    }

    #[test]
    fn test_metric_columns() {
        assert_eq!(Metric::EstimatedFireArea.column(), "Estimated_fire_area");
        assert_eq!(Metric::Count.column(), "Count");
    }
}
