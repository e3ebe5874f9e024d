//! Decoding of the government spending API payload.
//!
//! The payload carries two breakdowns of the same budget, each as an
//! array of `[name, amount, percent_of_budget]` tuples already ranked by
//! the backend:
//!
//! ```json
//! {
//!   "agency_data": [["Department of Health", 1700000000000.0, 27.4], ...],
//!   "budget_functions_data": [["Medicare", 1500000000000.0, 24.1], ...]
//! }
//! ```

use civic_core::SpendingEntry;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when decoding a spending payload.
#[derive(Debug, Error)]
pub enum SpendingDataError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry '{name}' has negative amount {amount}")]
    NegativeAmount { name: String, amount: Decimal },

    #[error("entry '{name}' has budget share {percent_budget} outside 0-100")]
    ShareOutOfRange {
        name: String,
        percent_budget: Decimal,
    },
}

/// Wire shape of one spending line: `[name, amount, percent_of_budget]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpendingRow(pub String, pub Decimal, pub Decimal);

#[derive(Debug, Deserialize)]
struct SpendingResponse {
    #[serde(default)]
    agency_data: Vec<SpendingRow>,
    #[serde(default)]
    budget_functions_data: Vec<SpendingRow>,
}

/// Both decoded breakdowns of the budget, in backend rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GovernmentSpending {
    pub agency_data: Vec<SpendingEntry>,
    pub budget_functions_data: Vec<SpendingEntry>,
}

impl GovernmentSpending {
    pub fn is_empty(&self) -> bool {
        self.agency_data.is_empty() && self.budget_functions_data.is_empty()
    }
}

/// Decodes and validates a spending API response.
///
/// Backend order is preserved untouched; it is the authoritative ranking
/// for the aggregation layer.
///
/// # Errors
///
/// Returns [`SpendingDataError`] when the JSON is malformed, an amount is
/// negative, or a budget share falls outside `[0, 100]`.
pub fn parse_spending_response(json: &str) -> Result<GovernmentSpending, SpendingDataError> {
    let raw: SpendingResponse = serde_json::from_str(json)?;
    let spending = GovernmentSpending {
        agency_data: decode_rows(raw.agency_data)?,
        budget_functions_data: decode_rows(raw.budget_functions_data)?,
    };
    tracing::debug!(
        agencies = spending.agency_data.len(),
        budget_functions = spending.budget_functions_data.len(),
        "decoded spending payload"
    );
    Ok(spending)
}

fn decode_rows(rows: Vec<SpendingRow>) -> Result<Vec<SpendingEntry>, SpendingDataError> {
    rows.into_iter()
        .map(|SpendingRow(name, amount, percent_budget)| {
            if amount < Decimal::ZERO {
                return Err(SpendingDataError::NegativeAmount { name, amount });
            }
            if percent_budget < Decimal::ZERO || percent_budget > Decimal::ONE_HUNDRED {
                return Err(SpendingDataError::ShareOutOfRange {
                    name,
                    percent_budget,
                });
            }
            Ok(SpendingEntry {
                name,
                amount,
                percent_budget,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = r#"{
        "agency_data": [
            ["Department of Health and Human Services", 1700000000000.0, 27.4],
            ["Social Security Administration", 1400000000000.0, 22.6]
        ],
        "budget_functions_data": [
            ["Medicare", 1500000000000.0, 24.1]
        ]
    }"#;

    #[test]
    fn parse_decodes_tuple_rows_into_entries() {
        let spending = parse_spending_response(SAMPLE).unwrap();

        assert_eq!(spending.agency_data.len(), 2);
        assert_eq!(spending.budget_functions_data.len(), 1);
        assert_eq!(
            spending.agency_data[0],
            SpendingEntry {
                name: "Department of Health and Human Services".to_string(),
                amount: dec!(1700000000000),
                percent_budget: dec!(27.4),
            }
        );
    }

    #[test]
    fn parse_preserves_backend_order() {
        let spending = parse_spending_response(SAMPLE).unwrap();

        let names: Vec<&str> = spending
            .agency_data
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Department of Health and Human Services",
                "Social Security Administration",
            ]
        );
    }

    #[test]
    fn parse_defaults_missing_breakdowns_to_empty() {
        let spending = parse_spending_response("{}").unwrap();

        assert!(spending.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let result = parse_spending_response("{\"agency_data\": [[\"broken\"]]}");

        assert!(matches!(result, Err(SpendingDataError::Json(_))));
    }

    #[test]
    fn parse_rejects_negative_amount() {
        let json = r#"{"agency_data": [["NASA", -5.0, 1.0]]}"#;

        let result = parse_spending_response(json);

        assert!(matches!(
            result,
            Err(SpendingDataError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn parse_rejects_share_above_one_hundred() {
        let json = r#"{"agency_data": [["NASA", 5.0, 101.0]]}"#;

        let result = parse_spending_response(json);

        assert!(matches!(
            result,
            Err(SpendingDataError::ShareOutOfRange { .. })
        ));
    }

    #[test]
    fn parsed_entries_feed_the_aggregator() {
        let spending = parse_spending_response(SAMPLE).unwrap();

        let aggregated = civic_core::calculations::aggregate_top(&spending.agency_data, 1);

        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[1].name, "Other");
        assert_eq!(aggregated[1].amount, dec!(1400000000000));
    }
}
