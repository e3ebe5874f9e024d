use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One segment of a progressive rate schedule.
///
/// `max_income` is `None` for the top bracket, which is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    /// Width of the bracket, or `None` when unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }
}
