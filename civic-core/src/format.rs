//! Display formatting for the chart and summary layers.
//!
//! Mirrors the presentation conventions used across the dashboard:
//! currency as whole dollars with thousands separators, tax rates to one
//! decimal place, and budget shares to two.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculations::common::round_half_up;

/// Formats an amount as whole dollars: `$45,882`, `-$1,200`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a fractional rate to one decimal place: `0.08236` → `"8.2%"`.
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Formats an already-percent value to two decimal places: `23.5` →
/// `"23.50%"`.
pub fn format_percent(percent: Decimal) -> String {
    format!("{:.2}%", round_half_up(percent))
}
