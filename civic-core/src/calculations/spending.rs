//! Budget/spending rollups and per-taxpayer allocation.
//!
//! The spending charts show the top slices of a budget breakdown with the
//! long tail folded into a single "Other" slice, a proportional allocation
//! of the user's own tax bill across the lines, and two summary figures
//! (total spending and the largest share).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use civic_core::SpendingEntry;
//! use civic_core::calculations::{aggregate_top, allocate_user_share};
//!
//! let entries = vec![
//!     SpendingEntry { name: "Health".into(), amount: dec!(1700), percent_budget: dec!(27) },
//!     SpendingEntry { name: "Defense".into(), amount: dec!(1200), percent_budget: dec!(19) },
//!     SpendingEntry { name: "Transportation".into(), amount: dec!(300), percent_budget: dec!(5) },
//! ];
//!
//! let rollup = aggregate_top(&entries, 2);
//! assert_eq!(rollup.len(), 3);
//! assert_eq!(rollup[2].name, "Other");
//! assert_eq!(rollup[2].amount, dec!(300));
//!
//! let shares = allocate_user_share(&entries, dec!(4000));
//! assert_eq!(shares[0].allocated_amount, dec!(1080));
//! ```

use rust_decimal::Decimal;

use crate::models::{AllocatedShare, SpendingEntry};

/// Name of the synthetic entry that absorbs everything past the top `k`.
pub const OTHER_LABEL: &str = "Other";

/// Keeps the first `k` entries and folds the remainder into one synthetic
/// [`OTHER_LABEL`] entry summing their amounts and budget shares.
///
/// Input order is authoritative (the backend ranks entries by
/// significance) and is never recomputed here. When the input fits within
/// `k` it is returned unchanged, with no synthetic entry. `k == 0` folds
/// every entry into "Other".
pub fn aggregate_top(entries: &[SpendingEntry], k: usize) -> Vec<SpendingEntry> {
    if entries.len() <= k {
        return entries.to_vec();
    }

    let (top, rest) = entries.split_at(k);
    let mut aggregated = top.to_vec();
    let amount: Decimal = rest.iter().map(|entry| entry.amount).sum();
    let percent_budget: Decimal = rest.iter().map(|entry| entry.percent_budget).sum();
    aggregated.push(SpendingEntry {
        name: OTHER_LABEL.to_string(),
        amount,
        percent_budget,
    });
    aggregated
}

/// Distributes a taxpayer's total tax across the budget lines in
/// proportion to each line's share of the budget.
///
/// A zero `user_tax` allocates zero dollars everywhere; whether to show
/// that or fall back to the nationwide amounts is the caller's decision.
pub fn allocate_user_share(entries: &[SpendingEntry], user_tax: Decimal) -> Vec<AllocatedShare> {
    entries
        .iter()
        .map(|entry| AllocatedShare {
            name: entry.name.clone(),
            allocated_amount: entry.percent_budget / Decimal::ONE_HUNDRED * user_tax,
        })
        .collect()
}

/// Sum of all entry amounts (the "Total Spending" card).
pub fn total_spending(entries: &[SpendingEntry]) -> Decimal {
    entries.iter().map(|entry| entry.amount).sum()
}

/// The most significant entry (the "Largest Share" card). Relies on the
/// authoritative input order rather than comparing amounts.
pub fn largest_share(entries: &[SpendingEntry]) -> Option<&SpendingEntry> {
    entries.first()
}
