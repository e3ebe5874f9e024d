//! Progressive federal income tax calculation.
//!
//! Implements standard marginal-bracket taxation against the fixed 2023
//! rate schedules:
//!
//! 1. Taxable income is gross income minus the standard deduction,
//!    floored at zero.
//! 2. The marginal rate is the rate of the highest bracket whose lower
//!    bound is strictly below the taxable income.
//! 3. Total tax consumes the taxable income bracket by bracket in
//!    ascending order, each segment taxed at its own rate.
//! 4. After-tax income is gross income minus total tax; the effective
//!    rate is total tax over gross income.
//!
//! The calculator is a pure function of its inputs. Callers are expected
//! to guard non-positive income (the UI shows a prompt instead of a
//! result); invoked directly with such income it returns a zeroed result
//! rather than erroring.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use civic_core::FilingStatus;
//! use civic_core::calculations::calculate_tax;
//!
//! let result = calculate_tax(dec!(50000), FilingStatus::Single);
//!
//! assert_eq!(result.total_tax, dec!(4118.00));
//! assert_eq!(result.after_tax_income, dec!(45882.00));
//! assert_eq!(result.marginal_rate, dec!(0.12));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common;
use crate::input::parse_income;
use crate::models::{FilingStatus, TaxResult};
use crate::schedule::TaxSchedule;

/// Calculator for one rate schedule.
///
/// The schedule is borrowed so the same calculator pattern works for the
/// built-in 2023 tables and for custom tables in tests.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Computes tax owed, after-tax income, and the effective and marginal
    /// rates for a gross annual income.
    pub fn calculate(&self, income: Decimal) -> TaxResult {
        if income <= Decimal::ZERO {
            warn!(%income, "tax requested for non-positive income; callers should guard this");
            return TaxResult {
                total_tax: Decimal::ZERO,
                after_tax_income: income,
                effective_rate: Decimal::ZERO,
                marginal_rate: Decimal::ZERO,
            };
        }

        let taxable_income = self.taxable_income(income);
        let total_tax = self.bracketed_tax(taxable_income);

        TaxResult {
            total_tax,
            after_tax_income: income - total_tax,
            effective_rate: total_tax / income,
            marginal_rate: self.marginal_rate(taxable_income),
        }
    }

    /// Gross income minus the standard deduction, floored at zero.
    fn taxable_income(&self, income: Decimal) -> Decimal {
        common::max(income - self.schedule.standard_deduction, Decimal::ZERO)
    }

    /// Rate of the last bracket whose lower bound is strictly below the
    /// taxable income. Zero when the deduction absorbs the income.
    fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        let mut rate = Decimal::ZERO;
        for bracket in &self.schedule.brackets {
            if taxable_income > bracket.min_income {
                rate = bracket.tax_rate;
            }
        }
        rate
    }

    /// Sums tax bracket by bracket: each bracket consumes at most its own
    /// width of the remaining taxable income at its own rate.
    fn bracketed_tax(&self, taxable_income: Decimal) -> Decimal {
        let mut total_tax = Decimal::ZERO;
        let mut remaining = taxable_income;

        for bracket in &self.schedule.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let bracket_income = match bracket.width() {
                Some(width) => remaining.min(width),
                None => remaining,
            };
            total_tax += bracket_income * bracket.tax_rate;
            remaining -= bracket_income;
        }

        total_tax
    }
}

/// Computes the tax result for a gross income under the 2023 schedule of
/// the given filing status.
pub fn calculate_tax(income: Decimal, status: FilingStatus) -> TaxResult {
    TaxCalculator::new(TaxSchedule::for_status(status)).calculate(income)
}

/// Parses a raw income field and calculates, or `None` when the input is
/// empty, non-numeric, or non-positive (the "enter your income" state).
pub fn calculate_from_input(raw: &str, status: FilingStatus) -> Option<TaxResult> {
    parse_income(raw).map(|income| calculate_tax(income, status))
}
