// 🧭 Qualification Pipeline
// Computes the derived ratios, then applies the four filters in fixed order,
// each filter's output feeding the next filter's input. Purely computational:
// identical inputs always yield identical outputs.

use crate::calculators::{loan_to_value_ratio, monthly_debt_ratio};
use crate::error::QualifierError;
use crate::filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
use crate::rate_sheet::Offer;
use serde::Serialize;

// ============================================================================
// APPLICANT PROFILE
// ============================================================================

/// The applicant's financial information, collected once per run.
/// Immutable after creation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub credit_score: u32,
    pub monthly_debt: f64,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub home_value: f64,
}

// ============================================================================
// QUALIFICATION RESULT
// ============================================================================

/// Surviving-row count after one filter stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterStage {
    pub filter: &'static str,
    pub remaining: usize,
}

/// Outcome of a qualification run: the qualifying offers, the two derived
/// ratios, and the per-stage survivor counts.
///
/// An empty offer table here is a normal outcome, not an error. The caller
/// decides how to report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Qualification {
    pub offers: Vec<Offer>,
    pub monthly_debt_ratio: f64,
    pub loan_to_value_ratio: f64,
    pub stages: Vec<FilterStage>,
}

impl Qualification {
    /// True when no offer survived all four filters
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Determine which loans the applicant qualifies for.
///
/// Filter order: max loan size, credit score, debt-to-income, loan-to-value.
/// Final membership is order-independent (set intersection semantics); the
/// fixed sequence just narrows the table early with the cheap comparisons.
/// Both ratios are computed before any filter runs, so a zero income or home
/// value aborts the whole run first.
pub fn find_qualifying_loans(
    offers: &[Offer],
    profile: &ApplicantProfile,
) -> Result<Qualification, QualifierError> {
    let monthly_debt_ratio = monthly_debt_ratio(profile.monthly_debt, profile.monthly_income)?;
    let loan_to_value_ratio = loan_to_value_ratio(profile.loan_amount, profile.home_value)?;

    let mut stages = Vec::with_capacity(4);

    let filtered = filter_max_loan_size(profile.loan_amount, offers);
    stages.push(FilterStage {
        filter: "max loan size",
        remaining: filtered.len(),
    });

    let filtered = filter_credit_score(profile.credit_score, &filtered);
    stages.push(FilterStage {
        filter: "credit score",
        remaining: filtered.len(),
    });

    let filtered = filter_debt_to_income(monthly_debt_ratio, &filtered);
    stages.push(FilterStage {
        filter: "debt-to-income",
        remaining: filtered.len(),
    });

    let filtered = filter_loan_to_value(loan_to_value_ratio, &filtered);
    stages.push(FilterStage {
        filter: "loan-to-value",
        remaining: filtered.len(),
    });

    Ok(Qualification {
        offers: filtered,
        monthly_debt_ratio,
        loan_to_value_ratio,
        stages,
    })
}

// ============================================================================
// TESTS
// ============================================================================
