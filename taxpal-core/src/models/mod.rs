mod deduction;
mod tax_bracket;
mod tax_breakdown;
mod tax_input;
mod tax_year_policy;

pub use deduction::{DeductionCategory, DeductionEntry};
pub use tax_bracket::TaxBracket;
pub use tax_breakdown::TaxBreakdown;
pub use tax_input::TaxInput;
pub use tax_year_policy::{PolicyError, TaxYearPolicy};
