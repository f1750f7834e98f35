//! Dataset Loader
//!
//! Fetches the wildfire CSV over HTTP (or reads it from disk) and parses it
//! into a `FireDataset`. Only `Region`, `Date`, `Estimated_fire_area` and
//! `Count` are read; other columns are ignored.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::dataset::FireDataset;
use super::error::{DataError, DataResult};
use super::types::FireRecord;

/// Public historical wildfire dataset
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/Historical_Wildfires.csv";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = ["Region", "Date", "Estimated_fire_area", "Count"];

/// Where the CSV comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote resource fetched with a GET request
    Url(String),
    /// Local file
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` are URLs, anything else is a path
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATASET_URL.to_string())
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One CSV row as read from disk, before date parsing
#[derive(Debug, Deserialize)]
struct RawFireRow {
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Estimated_fire_area")]
    estimated_fire_area: f64,
    #[serde(rename = "Count")]
    count: f64,
}

/// Loads the dataset once at startup
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    /// Create a loader whose HTTP requests give up after `timeout`
    pub fn new(timeout: Duration) -> DataResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch or read the source and parse it
    pub async fn load(&self, source: &DataSource) -> DataResult<FireDataset> {
        let started = std::time::Instant::now();

        let body = match source {
            DataSource::Url(url) => self.fetch(url).await?,
            DataSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| DataError::Io {
                        path: path.clone(),
                        error: e.to_string(),
                    })?
            }
        };

        let dataset = Self::parse_csv(&body)?;

        tracing::info!(
            source = %source,
            records = dataset.len(),
            years = dataset.years().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded wildfire dataset"
        );

        Ok(dataset)
    }

    async fn fetch(&self, url: &str) -> DataResult<String> {
        tracing::info!("Fetching dataset from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Parse CSV text into a dataset
    ///
    /// Fails on the first malformed row; no rows are skipped.
    pub fn parse_csv(csv_data: &str) -> DataResult<FireDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DataError::Csv {
                line: 1,
                message: e.to_string(),
            })?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();

        for (line_num, result) in reader.records().enumerate() {
            let line = line_num as u64 + 2;

            let record = result.map_err(|e| DataError::Csv {
                line,
                message: e.to_string(),
            })?;

            let row: RawFireRow =
                record
                    .deserialize(Some(&headers))
                    .map_err(|e| DataError::Csv {
                        line,
                        message: e.to_string(),
                    })?;

            let date = parse_date(&row.date).ok_or_else(|| DataError::InvalidDate {
                line,
                value: row.date.clone(),
            })?;

            records.push(FireRecord::new(
                row.region,
                date,
                row.estimated_fire_area,
                row.count,
            ));
        }

        Ok(FireDataset::new(records))
    }
}

/// Parse a calendar date, month-first for slash-separated values
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    let datetime_formats = [
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
