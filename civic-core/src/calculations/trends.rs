//! Year-over-year trend summaries and national-average overlays.
//!
//! The census and crime charts both derive the same two shapes from a
//! yearly state series: a "latest value, up/down delta versus the earliest
//! year" summary card, and a merged series carrying the nationwide value
//! for each year the national table covers.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a year-over-year movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Latest observation of a yearly series compared against its earliest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub baseline_year: i32,
    pub baseline: Decimal,
    pub latest_year: i32,
    pub latest: Decimal,
    /// Signed change, `latest - baseline`.
    pub delta: Decimal,
}

impl TrendSummary {
    pub fn direction(&self) -> TrendDirection {
        match self.delta.cmp(&Decimal::ZERO) {
            Ordering::Greater => TrendDirection::Up,
            Ordering::Less => TrendDirection::Down,
            Ordering::Equal => TrendDirection::Flat,
        }
    }

    /// Unsigned change, as the summary cards display it.
    pub fn magnitude(&self) -> Decimal {
        self.delta.abs()
    }
}

/// Summarizes a `(year, value)` series: latest value and its delta against
/// the earliest year.
///
/// The series is sorted by year internally, so callers may pass points in
/// any order. Returns `None` for an empty series; a single point yields a
/// flat summary against itself.
pub fn trend_summary(points: &[(i32, Decimal)]) -> Option<TrendSummary> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|&(year, _)| year);

    let &(baseline_year, baseline) = sorted.first()?;
    let &(latest_year, latest) = sorted.last()?;

    Some(TrendSummary {
        baseline_year,
        baseline,
        latest_year,
        latest,
        delta: latest - baseline,
    })
}

/// One point of a state series with the matching national value, when the
/// national table covers that year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPoint {
    pub year: i32,
    pub value: Decimal,
    pub national: Option<Decimal>,
}

/// Merges a state series with a year-keyed national table, preserving the
/// input order. Years missing from the table get no national value rather
/// than being dropped.
pub fn overlay_national(
    points: &[(i32, Decimal)],
    national: &BTreeMap<i32, Decimal>,
) -> Vec<OverlayPoint> {
    points
        .iter()
        .map(|&(year, value)| OverlayPoint {
            year,
            value,
            national: national.get(&year).copied(),
        })
        .collect()
}
