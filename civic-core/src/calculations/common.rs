//! Shared helpers for the calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal to two places, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use civic_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(8.235)), dec!(8.24));
/// assert_eq!(round_half_up(dec!(8.234)), dec!(8.23));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimals.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
        assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn round_half_up_leaves_two_place_values_alone() {
        assert_eq!(round_half_up(dec!(4118.00)), dec!(4118.00));
    }

    #[test]
    fn max_picks_larger_operand() {
        assert_eq!(max(dec!(0), dec!(36150)), dec!(36150));
        assert_eq!(max(dec!(-5), dec!(0)), dec!(0));
    }
}
