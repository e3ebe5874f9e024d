//! Derived-number computations backing the dashboard's chart layer.
//!
//! Everything here is a pure, synchronous transformation: the progressive
//! income tax calculator, the budget/spending rollup, and the shared
//! trend-summary helpers.

pub mod common;
pub mod income_tax;
pub mod spending;
pub mod trends;

pub use income_tax::{TaxCalculator, calculate_from_input, calculate_tax};
pub use spending::{
    OTHER_LABEL, aggregate_top, allocate_user_share, largest_share, total_spending,
};
pub use trends::{OverlayPoint, TrendDirection, TrendSummary, overlay_national, trend_summary};
