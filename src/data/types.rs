//! Core data types for the wildfire dataset
//!
//! - `FireRecord`: One row of the source CSV plus its derived Month/Year
//! - `Region`: The seven Australian state/territory codes used by the dataset

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single wildfire observation
///
/// Immutable once loaded. `month` and `year` are derived from `date` at
/// construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct FireRecord {
    /// Region code exactly as it appears in the CSV (e.g. "NSW")
    pub region: String,
    /// Observation date
    pub date: NaiveDate,
    /// Estimated fire area (km²)
    pub estimated_fire_area: f64,
    /// Pixel count for presumed vegetation fires
    pub count: f64,
    /// English month name, e.g. "January"
    pub month: String,
    /// Calendar year
    pub year: i32,
}

impl FireRecord {
    /// Create a record, deriving month name and year from the date
    pub fn new(
        region: impl Into<String>,
        date: NaiveDate,
        estimated_fire_area: f64,
        count: f64,
    ) -> Self {
        Self {
            region: region.into(),
            date,
            estimated_fire_area,
            count,
            month: date.format("%B").to_string(),
            year: date.year(),
        }
    }

    /// Month number (1-12)
    pub fn month_number(&self) -> u32 {
        self.date.month()
    }
}

/// Australian state or territory as coded in the dataset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    #[serde(rename = "NSW")]
    NewSouthWales,
    #[serde(rename = "NT")]
    NorthernTerritory,
    #[serde(rename = "QL")]
    Queensland,
    #[serde(rename = "SA")]
    SouthAustralia,
    #[serde(rename = "TA")]
    Tasmania,
    #[serde(rename = "VI")]
    Victoria,
    #[serde(rename = "WA")]
    WesternAustralia,
}

impl Region {
    /// All regions in selector order
    pub fn all() -> &'static [Region] {
        &[
            Region::NewSouthWales,
            Region::NorthernTerritory,
            Region::Queensland,
            Region::SouthAustralia,
            Region::Tasmania,
            Region::Victoria,
            Region::WesternAustralia,
        ]
    }

    /// Short code used in the CSV
    pub fn code(&self) -> &'static str {
        match self {
            Region::NewSouthWales => "NSW",
            Region::NorthernTerritory => "NT",
            Region::Queensland => "QL",
            Region::SouthAustralia => "SA",
            Region::Tasmania => "TA",
            Region::Victoria => "VI",
            Region::WesternAustralia => "WA",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Region::NewSouthWales => "New South Wales",
            Region::NorthernTerritory => "Northern Territory",
            Region::Queensland => "Queensland",
            Region::SouthAustralia => "South Australia",
            Region::Tasmania => "Tasmania",
            Region::Victoria => "Victoria",
            Region::WesternAustralia => "Western Australia",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid region: {}. Use one of NSW, NT, QL, SA, TA, VI, WA",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_month_and_year() {
        let date = NaiveDate::from_ymd_opt(2005, 1, 4).unwrap();
        let record = FireRecord::new("NSW", date, 8.5, 4.0);

        assert_eq!(record.month, "January");
        assert_eq!(record.year, 2005);
        assert_eq!(record.month_number(), 1);
    }

    #[test]
    fn test_region_codes_and_labels() {
        assert_eq!(Region::all().len(), 7);
        assert_eq!(Region::Queensland.code(), "QL");
        assert_eq!(Region::Tasmania.label(), "Tasmania");
        assert_eq!(Region::default().code(), "NSW");
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("WA".parse::<Region>(), Ok(Region::WesternAustralia));
        assert_eq!("vi".parse::<Region>(), Ok(Region::Victoria));
        assert!("ACT".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_serde_uses_code() {
        let json = serde_json::to_string(&Region::NorthernTerritory).unwrap();
        assert_eq!(json, "\"NT\"");
    }
}
