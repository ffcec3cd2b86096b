// 📊 Qualification Report
// Human-readable summary plus JSON export of one qualification run

use crate::pipeline::{FilterStage, Qualification};
use crate::rate_sheet::Offer;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct QualificationReport {
    /// When this report was generated
    pub generated_at: DateTime<Utc>,

    /// Offers in the rate sheet before filtering
    pub offers_considered: usize,

    /// Derived ratios used by the filters
    pub monthly_debt_ratio: f64,
    pub loan_to_value_ratio: f64,

    /// Surviving-row count after each filter stage
    pub stages: Vec<FilterStage>,

    /// Offers that passed all four filters, in filtered order
    pub qualifying: Vec<Offer>,
}

impl QualificationReport {
    /// Build a report from a pipeline result
    pub fn new(offers_considered: usize, qualification: &Qualification) -> Self {
        QualificationReport {
            generated_at: Utc::now(),
            offers_considered,
            monthly_debt_ratio: qualification.monthly_debt_ratio,
            loan_to_value_ratio: qualification.loan_to_value_ratio,
            stages: qualification.stages.clone(),
            qualifying: qualification.offers.clone(),
        }
    }

    /// One-paragraph console summary (ratios rounded for display only)
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Offers considered: {}", self.offers_considered),
            format!("Monthly debt-to-income ratio: {:.2}", self.monthly_debt_ratio),
            format!("Loan-to-value ratio: {:.2}", self.loan_to_value_ratio),
        ];

        for stage in &self.stages {
            lines.push(format!(
                "  after {} filter: {} remaining",
                stage.filter, stage.remaining
            ));
        }

        lines.push(format!("Qualifying loans: {}", self.qualifying.len()));
        lines.join("\n")
    }

    /// Write the report as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
