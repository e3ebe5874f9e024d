use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One named line of a budget breakdown (by agency or by budget function).
///
/// Entries arrive from the data source already ordered by descending
/// significance. That order is authoritative and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub name: String,
    pub amount: Decimal,
    /// Share of the total budget, in percent (0-100).
    pub percent_budget: Decimal,
}

/// A taxpayer's proportional share of one budget line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedShare {
    pub name: String,
    pub allocated_amount: Decimal,
}
