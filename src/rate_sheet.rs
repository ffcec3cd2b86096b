// 🏦 Rate Sheet - Offer schema and CSV load/save
// Fixed-schema records parsed at load time, so the filters compare typed
// numbers instead of raw CSV strings

use crate::error::QualifierError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// OFFER SCHEMA
// ============================================================================

/// One lender's loan terms from the daily rate sheet.
///
/// CSV column order: Lender, Max Loan Amount, Max LTV, Min Credit Score,
/// Max DTI. The header row is discarded on load and never written on save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    /// Lender name (free text, not required to be unique)
    pub lender: String,

    /// Largest loan this lender underwrites
    pub max_loan_amount: f64,

    /// Maximum loan-to-value ratio the lender accepts (fraction)
    pub max_loan_to_value: f64,

    /// Minimum credit score the lender requires
    pub min_credit_score: u32,

    /// Maximum debt-to-income ratio the lender accepts (fraction)
    pub max_debt_to_income: f64,
}

/// Parse one positional field of an offer row.
///
/// A non-numeric value in a required numeric field is a data-integrity
/// error for the whole sheet, not a row to skip.
fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    field: &str,
) -> Result<T, QualifierError> {
    let raw = record.get(index).unwrap_or("");
    raw.trim()
        .parse::<T>()
        .map_err(|_| QualifierError::input_format(field, raw))
}

impl Offer {
    /// Build an offer from one CSV record (positional fields)
    fn from_record(record: &csv::StringRecord) -> Result<Self, QualifierError> {
        Ok(Offer {
            lender: record.get(0).unwrap_or("").to_string(),
            max_loan_amount: parse_field(record, 1, "max loan amount")?,
            max_loan_to_value: parse_field(record, 2, "max loan-to-value ratio")?,
            min_credit_score: parse_field(record, 3, "min credit score")?,
            max_debt_to_income: parse_field(record, 4, "max debt-to-income ratio")?,
        })
    }
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Read a rate sheet from any reader (header row discarded).
///
/// Source row order is preserved. Any unparseable numeric field aborts the
/// load with the offending line number attached.
pub fn read_rate_sheet<R: Read>(reader: R) -> Result<Vec<Offer>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut offers = Vec::new();

    for (line_num, result) in rdr.records().enumerate() {
        // +2 because: 1-indexed + header row
        let record = result
            .with_context(|| format!("Failed to parse rate sheet line {}", line_num + 2))?;

        let offer = Offer::from_record(&record)
            .with_context(|| format!("Bad offer on rate sheet line {}", line_num + 2))?;

        offers.push(offer);
    }

    Ok(offers)
}

/// Load a rate sheet CSV from disk
pub fn load_rate_sheet<P: AsRef<Path>>(path: P) -> Result<Vec<Offer>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Failed to open rate sheet: {}", path.as_ref().display()))?;
    read_rate_sheet(file)
}

/// Write offers to any writer, comma-delimited, no header row,
/// in the order given
pub fn write_rate_sheet<W: Write>(writer: W, offers: &[Offer]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for offer in offers {
        wtr.write_record(&[
            offer.lender.clone(),
            offer.max_loan_amount.to_string(),
            offer.max_loan_to_value.to_string(),
            offer.min_credit_score.to_string(),
            offer.max_debt_to_income.to_string(),
        ])
        .context("Failed to write offer row")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Save offers as CSV to the given path
pub fn save_rate_sheet<P: AsRef<Path>>(path: P, offers: &[Offer]) -> Result<()> {
    let file = File::create(path.as_ref())
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;
    write_rate_sheet(file, offers)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QualifierError;

    const SHEET: &str = "\
Lender,Max Loan Amount,Max LTV,Min Credit Score,Max DTI
Bank of Big - Premier Option,300000,0.85,770,0.35
West Central Credit Union - Premier Option,400000,0.9,750,0.35
";

    #[test]
    fn test_header_is_discarded_and_order_preserved() {
        let offers = read_rate_sheet(SHEET.as_bytes()).unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].lender, "Bank of Big - Premier Option");
        assert_eq!(
            offers[1].lender,
            "West Central Credit Union - Premier Option"
        );
    }

    #[test]
    fn test_numeric_fields_are_typed_at_load() {
        let offers = read_rate_sheet(SHEET.as_bytes()).unwrap();
        assert_eq!(offers[0].max_loan_amount, 300000.0);
        assert_eq!(offers[0].max_loan_to_value, 0.85);
        assert_eq!(offers[0].min_credit_score, 770);
        assert_eq!(offers[0].max_debt_to_income, 0.35);
    }

    #[test]
    fn test_non_numeric_field_aborts_load() {
        let sheet = "\
Lender,Max Loan Amount,Max LTV,Min Credit Score,Max DTI
Bank of Big,lots,0.85,770,0.35
";
        let err = read_rate_sheet(sheet.as_bytes()).unwrap_err();
        let core = err.downcast_ref::<QualifierError>().unwrap();
        assert_eq!(
            *core,
            QualifierError::input_format("max loan amount", "lots")
        );
    }

    #[test]
    fn test_save_writes_no_header() {
        let offers = read_rate_sheet(SHEET.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_rate_sheet(&mut out, &offers).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(
            written,
            "Bank of Big - Premier Option,300000,0.85,770,0.35\n\
             West Central Credit Union - Premier Option,400000,0.9,750,0.35\n"
        );
    }

    #[test]
    fn test_empty_sheet_loads_as_empty_table() {
        let sheet = "Lender,Max Loan Amount,Max LTV,Min Credit Score,Max DTI\n";
        let offers = read_rate_sheet(sheet.as_bytes()).unwrap();
        assert!(offers.is_empty());
    }
}
