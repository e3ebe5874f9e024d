//! Parsing of raw user input from the income text field.

use rust_decimal::Decimal;

/// Strips the decoration users type into a money field: surrounding
/// whitespace, a leading `$`, and comma thousands separators.
fn normalize_income_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses an income text field into a positive [`Decimal`].
///
/// Returns `None` for empty, non-numeric, or non-positive input; the
/// calculator is only applicable to positive income, and callers render a
/// prompt state instead of a result for anything else. Logs a warning for
/// input that is present but not parseable.
pub fn parse_income(s: &str) -> Option<Decimal> {
    let normalized = normalize_income_input(s);
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse::<Decimal>() {
        Ok(income) if income > Decimal::ZERO => Some(income),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(input = %s, "income field is not numeric: {}", e);
            None
        }
    }
}
