//! In-memory record set
//!
//! Built once by the loader and shared read-only behind `Arc`. Queries
//! borrow from it and never mutate it.

use std::collections::HashSet;

use super::types::FireRecord;

/// The full wildfire record set
#[derive(Debug, Clone, Default)]
pub struct FireDataset {
    records: Vec<FireRecord>,
    /// Distinct years in the order they first appear
    years: Vec<i32>,
}

impl FireDataset {
    pub fn new(records: Vec<FireRecord>) -> Self {
        let mut seen = HashSet::new();
        let years = records
            .iter()
            .map(|r| r.year)
            .filter(|y| seen.insert(*y))
            .collect();

        Self { records, years }
    }

    pub fn records(&self) -> &[FireRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, first-seen order
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Records for one region and year
    ///
    /// `region` is compared verbatim. A `None` year matches nothing.
    pub fn select<'a>(
        &'a self,
        region: &'a str,
        year: Option<i32>,
    ) -> impl Iterator<Item = &'a FireRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.region == region)
            .filter(move |r| Some(r.year) == year)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::fixtures::sample_dataset;

    #[test]
    fn test_years_in_encounter_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.years(), &[2005, 2006]);
    }

    #[test]
    fn test_select_region_and_year() {
        let dataset = sample_dataset();

        assert_eq!(dataset.select("NSW", Some(2005)).count(), 5);
        assert_eq!(dataset.select("NSW", Some(2006)).count(), 1);
        assert_eq!(dataset.select("NT", Some(2005)).count(), 1);
        assert_eq!(dataset.select("WA", Some(2005)).count(), 0);
    }

    #[test]
    fn test_select_is_exact_match() {
        let dataset = sample_dataset();

        assert_eq!(dataset.select("nsw", Some(2005)).count(), 0);
        assert_eq!(dataset.select("NSW", None).count(), 0);
    }

    #[test]
    fn test_select_leaves_records_untouched() {
        let dataset = sample_dataset();
        let before = dataset.records().to_vec();

        let _ = dataset.select("NSW", Some(2005)).count();

        assert_eq!(dataset.records(), before.as_slice());
    }
}
