//! Boundary decoding for the dashboard's data sources.
//!
//! The backend API ships spending breakdowns as arrays of
//! `[name, amount, percent_of_budget]` tuples, and the national census
//! averages live in a year-keyed JSON asset. This crate turns both into
//! the typed records `civic-core` computes over.

pub mod national;
pub mod spending;

pub use national::{NationalAverages, NationalAveragesTable, NationalDataError};
pub use spending::{GovernmentSpending, SpendingDataError, SpendingRow, parse_spending_response};
