// Loan Qualifier - Core Library
// Exposes the qualification pipeline for use in the CLI and tests

pub mod calculators;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod prompt;
pub mod rate_sheet;
pub mod report;

// Re-export commonly used types
pub use calculators::{loan_to_value_ratio, monthly_debt_ratio};
pub use error::QualifierError;
pub use filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
pub use pipeline::{find_qualifying_loans, ApplicantProfile, FilterStage, Qualification};
pub use rate_sheet::{load_rate_sheet, read_rate_sheet, save_rate_sheet, write_rate_sheet, Offer};
pub use report::QualificationReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
