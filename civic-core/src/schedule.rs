//! Fixed 2023 federal rate schedules and standard deductions.
//!
//! The four bracket tables and deduction amounts are static configuration
//! data, not derived values. Each schedule partitions `[0, ∞)` exactly once:
//! brackets are ascending, contiguous, and the last bracket is unbounded.
//! [`TaxSchedule::validate`] checks those invariants so that a malformed
//! table is caught by tests rather than producing silently wrong tax.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, TaxBracket};

/// Errors found when validating a rate schedule's configuration data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxScheduleError {
    /// The schedule has no brackets at all.
    #[error("schedule has no brackets")]
    Empty,

    /// The first bracket does not start at zero.
    #[error("first bracket starts at {0}, expected 0")]
    FirstBracketNotZero(Decimal),

    /// A bracket's lower bound does not continue where the previous
    /// bracket ended (gap or overlap).
    #[error("bracket starting at {min_income} does not continue from {expected}")]
    Discontinuous {
        expected: Decimal,
        min_income: Decimal,
    },

    /// A bracket's upper bound is at or below its lower bound.
    #[error("bracket starting at {min_income} ends at {max_income}")]
    InvertedBracket {
        min_income: Decimal,
        max_income: Decimal,
    },

    /// An unbounded bracket appears before the end of the table.
    #[error("bracket starting at {0} has no upper bound but is not last")]
    UnboundedBeforeLast(Decimal),

    /// The last bracket has an upper bound; the top bracket must cover
    /// all remaining income.
    #[error("last bracket must be unbounded, found upper bound {0}")]
    BoundedLastBracket(Decimal),

    /// A rate falls outside `[0, 1]`.
    #[error("bracket starting at {min_income} has rate {rate} outside [0, 1]")]
    RateOutOfRange { min_income: Decimal, rate: Decimal },

    /// Rates do not ascend with income; the schedule would not be
    /// progressive.
    #[error("bracket starting at {min_income} has rate {rate} below the previous rate")]
    RateNotAscending { min_income: Decimal, rate: Decimal },
}

/// An ordered bracket table plus the standard deduction that applies
/// before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub brackets: Vec<TaxBracket>,
    pub standard_deduction: Decimal,
}

impl TaxSchedule {
    /// The fixed 2023 schedule for a filing status.
    pub fn for_status(status: FilingStatus) -> &'static TaxSchedule {
        match status {
            FilingStatus::Single => &SINGLE_2023,
            FilingStatus::MarriedFilingJointly => &MARRIED_FILING_JOINTLY_2023,
            FilingStatus::MarriedFilingSeparately => &MARRIED_FILING_SEPARATELY_2023,
            FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_2023,
        }
    }

    /// Checks the partition invariants of the bracket table.
    ///
    /// # Errors
    ///
    /// Returns [`TaxScheduleError`] when the table is empty, does not start
    /// at zero, has gaps, overlaps, or inverted brackets, has a bounded top
    /// bracket, or carries rates outside `[0, 1]` or out of ascending order.
    pub fn validate(&self) -> Result<(), TaxScheduleError> {
        let Some(first) = self.brackets.first() else {
            return Err(TaxScheduleError::Empty);
        };
        if first.min_income != Decimal::ZERO {
            return Err(TaxScheduleError::FirstBracketNotZero(first.min_income));
        }

        let mut expected_min = Decimal::ZERO;
        let mut previous_rate = Decimal::ZERO;
        let last_index = self.brackets.len() - 1;

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(TaxScheduleError::RateOutOfRange {
                    min_income: bracket.min_income,
                    rate: bracket.tax_rate,
                });
            }
            if bracket.tax_rate < previous_rate {
                return Err(TaxScheduleError::RateNotAscending {
                    min_income: bracket.min_income,
                    rate: bracket.tax_rate,
                });
            }
            if bracket.min_income != expected_min {
                return Err(TaxScheduleError::Discontinuous {
                    expected: expected_min,
                    min_income: bracket.min_income,
                });
            }
            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(TaxScheduleError::InvertedBracket {
                        min_income: bracket.min_income,
                        max_income: max,
                    });
                }
                Some(max) if index == last_index => {
                    return Err(TaxScheduleError::BoundedLastBracket(max));
                }
                Some(max) => expected_min = max,
                None if index != last_index => {
                    return Err(TaxScheduleError::UnboundedBeforeLast(bracket.min_income));
                }
                None => {}
            }
            previous_rate = bracket.tax_rate;
        }

        Ok(())
    }
}

fn bracket(min: Decimal, max: Option<Decimal>, rate: Decimal) -> TaxBracket {
    TaxBracket {
        min_income: min,
        max_income: max,
        tax_rate: rate,
    }
}

static SINGLE_2023: LazyLock<TaxSchedule> = LazyLock::new(|| TaxSchedule {
    standard_deduction: dec!(13850),
    brackets: vec![
        bracket(dec!(0), Some(dec!(11000)), dec!(0.10)),
        bracket(dec!(11000), Some(dec!(44725)), dec!(0.12)),
        bracket(dec!(44725), Some(dec!(95375)), dec!(0.22)),
        bracket(dec!(95375), Some(dec!(182050)), dec!(0.24)),
        bracket(dec!(182050), Some(dec!(231250)), dec!(0.32)),
        bracket(dec!(231250), Some(dec!(578125)), dec!(0.35)),
        bracket(dec!(578125), None, dec!(0.37)),
    ],
});

static MARRIED_FILING_JOINTLY_2023: LazyLock<TaxSchedule> = LazyLock::new(|| TaxSchedule {
    standard_deduction: dec!(27700),
    brackets: vec![
        bracket(dec!(0), Some(dec!(22000)), dec!(0.10)),
        bracket(dec!(22000), Some(dec!(89450)), dec!(0.12)),
        bracket(dec!(89450), Some(dec!(190750)), dec!(0.22)),
        bracket(dec!(190750), Some(dec!(364200)), dec!(0.24)),
        bracket(dec!(364200), Some(dec!(462500)), dec!(0.32)),
        bracket(dec!(462500), Some(dec!(693750)), dec!(0.35)),
        bracket(dec!(693750), None, dec!(0.37)),
    ],
});

static MARRIED_FILING_SEPARATELY_2023: LazyLock<TaxSchedule> = LazyLock::new(|| TaxSchedule {
    standard_deduction: dec!(13850),
    brackets: vec![
        bracket(dec!(0), Some(dec!(11000)), dec!(0.10)),
        bracket(dec!(11000), Some(dec!(44725)), dec!(0.12)),
        bracket(dec!(44725), Some(dec!(95375)), dec!(0.22)),
        bracket(dec!(95375), Some(dec!(182050)), dec!(0.24)),
        bracket(dec!(182050), Some(dec!(231250)), dec!(0.32)),
        bracket(dec!(231250), Some(dec!(346875)), dec!(0.35)),
        bracket(dec!(346875), None, dec!(0.37)),
    ],
});

static HEAD_OF_HOUSEHOLD_2023: LazyLock<TaxSchedule> = LazyLock::new(|| TaxSchedule {
    standard_deduction: dec!(20800),
    brackets: vec![
        bracket(dec!(0), Some(dec!(15700)), dec!(0.10)),
        bracket(dec!(15700), Some(dec!(59850)), dec!(0.12)),
        bracket(dec!(59850), Some(dec!(95350)), dec!(0.22)),
        bracket(dec!(95350), Some(dec!(182050)), dec!(0.24)),
        bracket(dec!(182050), Some(dec!(231250)), dec!(0.32)),
        bracket(dec!(231250), Some(dec!(578100)), dec!(0.35)),
        bracket(dec!(578100), None, dec!(0.37)),
    ],
});
