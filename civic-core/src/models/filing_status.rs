use serde::{Deserialize, Serialize};

/// Federal filing status. Each variant maps to exactly one rate schedule
/// and one standard deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    /// All filing statuses, in display order.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    /// Wire key emitted by the filing-status selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married",
            Self::MarriedFilingSeparately => "marriedSeparately",
            Self::HeadOfHousehold => "headOfHousehold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married" => Some(Self::MarriedFilingJointly),
            "marriedSeparately" => Some(Self::MarriedFilingSeparately),
            "headOfHousehold" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }
}
