// 🔍 Qualification Filters
// Four independent predicate filters over the offer table. Each takes the
// current candidate table and returns a fresh subset; input is never mutated
// and relative row order is preserved. All comparisons are inclusive.

use crate::rate_sheet::Offer;

/// Keep offers whose loan cap covers the requested amount
pub fn filter_max_loan_size(loan_amount: f64, offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| loan_amount <= offer.max_loan_amount)
        .cloned()
        .collect()
}

/// Keep offers whose credit score floor the applicant meets or exceeds
pub fn filter_credit_score(credit_score: u32, offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| credit_score >= offer.min_credit_score)
        .cloned()
        .collect()
}

/// Keep offers whose debt-to-income ceiling admits the applicant's ratio
pub fn filter_debt_to_income(monthly_debt_ratio: f64, offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| monthly_debt_ratio <= offer.max_debt_to_income)
        .cloned()
        .collect()
}

/// Keep offers whose loan-to-value ceiling admits the applicant's ratio
pub fn filter_loan_to_value(loan_to_value_ratio: f64, offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| loan_to_value_ratio <= offer.max_loan_to_value)
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
