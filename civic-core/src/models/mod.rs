mod filing_status;
mod spending;
mod tax_bracket;
mod tax_result;

pub use filing_status::FilingStatus;
pub use spending::{AllocatedShare, SpendingEntry};
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;
