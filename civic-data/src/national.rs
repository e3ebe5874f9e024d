//! The year-keyed national averages table.
//!
//! The dashboard ships nationwide census figures as a static JSON asset
//! keyed by year string:
//!
//! ```json
//! {
//!   "2021": { "poverty_rate": 12.8, "educational": 88.9,
//!             "income_mean": 102316, "income_median": 70784 },
//!   "2022": { "poverty_rate": 12.6, "educational": 89.6,
//!             "income_mean": 105555, "income_median": 74580, "assault": 268.2 }
//! }
//! ```
//!
//! The table backs the national-average overlays on the state charts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when decoding the national averages asset.
#[derive(Debug, Error)]
pub enum NationalDataError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("year key '{0}' is not a number")]
    InvalidYear(String),
}

/// Nationwide figures for one census year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NationalAverages {
    pub poverty_rate: Decimal,
    pub educational: Decimal,
    pub income_mean: Decimal,
    pub income_median: Decimal,
    /// Aggravated assault rate per 100k; only present for years the crime
    /// dataset covers.
    #[serde(default)]
    pub assault: Option<Decimal>,
}

/// National averages indexed by year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalAveragesTable {
    by_year: BTreeMap<i32, NationalAverages>,
}

impl NationalAveragesTable {
    /// Decodes the `{"<year>": {...}}` JSON asset.
    ///
    /// # Errors
    ///
    /// Returns [`NationalDataError`] when the JSON is malformed or a key
    /// is not a year.
    pub fn from_json(json: &str) -> Result<Self, NationalDataError> {
        let raw: BTreeMap<String, NationalAverages> = serde_json::from_str(json)?;
        let mut by_year = BTreeMap::new();
        for (key, averages) in raw {
            let year: i32 = key
                .parse()
                .map_err(|_| NationalDataError::InvalidYear(key.clone()))?;
            by_year.insert(year, averages);
        }
        Ok(Self { by_year })
    }

    pub fn get(&self, year: i32) -> Option<&NationalAverages> {
        self.by_year.get(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    /// Projects one field into the year-keyed series that
    /// `civic_core::calculations::overlay_national` consumes. Years where
    /// the accessor yields `None` are left out of the series.
    pub fn series<F>(&self, field: F) -> BTreeMap<i32, Decimal>
    where
        F: Fn(&NationalAverages) -> Option<Decimal>,
    {
        self.by_year
            .iter()
            .filter_map(|(&year, averages)| field(averages).map(|value| (year, value)))
            .collect()
    }

    /// Restricts the table to the given years, the way the client seeds
    /// its cache with a recent-years subset. Unknown years are skipped.
    pub fn subset(&self, years: &[i32]) -> Self {
        let by_year = years
            .iter()
            .filter_map(|&year| {
                self.by_year
                    .get(&year)
                    .map(|averages| (year, averages.clone()))
            })
            .collect();
        Self { by_year }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = r#"{
        "2021": { "poverty_rate": 12.8, "educational": 88.9,
                  "income_mean": 102316, "income_median": 70784,
                  "assault": 279.7 },
        "2022": { "poverty_rate": 12.6, "educational": 89.6,
                  "income_mean": 105555, "income_median": 74580 },
        "2023": { "poverty_rate": 12.5, "educational": 90.1,
                  "income_mean": 109575, "income_median": 77719 }
    }"#;

    #[test]
    fn from_json_indexes_by_year() {
        let table = NationalAveragesTable::from_json(SAMPLE).unwrap();

        assert_eq!(table.years().collect::<Vec<_>>(), vec![2021, 2022, 2023]);
        assert_eq!(
            table.get(2022).map(|a| a.income_median),
            Some(dec!(74580))
        );
        assert_eq!(table.get(1990), None);
    }

    #[test]
    fn from_json_rejects_non_year_key() {
        let result = NationalAveragesTable::from_json(
            r#"{"latest": { "poverty_rate": 1, "educational": 1,
                            "income_mean": 1, "income_median": 1 }}"#,
        );

        assert!(matches!(result, Err(NationalDataError::InvalidYear(_))));
    }

    #[test]
    fn series_projects_one_field_per_year() {
        let table = NationalAveragesTable::from_json(SAMPLE).unwrap();

        let series = table.series(|a| Some(a.poverty_rate));

        assert_eq!(series.len(), 3);
        assert_eq!(series.get(&2023), Some(&dec!(12.5)));
    }

    #[test]
    fn series_skips_years_missing_the_field() {
        let table = NationalAveragesTable::from_json(SAMPLE).unwrap();

        let series = table.series(|a| a.assault);

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(&2021), Some(&dec!(279.7)));
    }

    #[test]
    fn subset_keeps_only_requested_years() {
        let table = NationalAveragesTable::from_json(SAMPLE).unwrap();

        let seeded = table.subset(&[2022, 2023, 2030]);

        assert_eq!(seeded.years().collect::<Vec<_>>(), vec![2022, 2023]);
    }

    #[test]
    fn series_feeds_the_overlay_merge() {
        let table = NationalAveragesTable::from_json(SAMPLE).unwrap();
        let state_points = vec![(2021, dec!(310.5)), (2022, dec!(295.0))];

        let merged = civic_core::calculations::overlay_national(
            &state_points,
            &table.series(|a| a.assault),
        );

        assert_eq!(merged[0].national, Some(dec!(279.7)));
        assert_eq!(merged[1].national, None);
    }
}
