use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output of a progressive tax calculation.
///
/// `after_tax_income` is `income - total_tax` on the gross income, not on
/// the taxable income: the standard deduction only shields income from
/// taxation, it is not removed from the household's money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub total_tax: Decimal,
    pub after_tax_income: Decimal,
    /// `total_tax / income`, or zero when income is non-positive.
    pub effective_rate: Decimal,
    /// Rate of the bracket containing the taxable income, or zero when the
    /// deduction absorbs the income entirely.
    pub marginal_rate: Decimal,
}
