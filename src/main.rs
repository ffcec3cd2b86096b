// Loan Qualifier CLI
// Matches a loan applicant against the daily rate sheet and saves the
// qualifying offers as CSV. All filtering lives in the library; this binary
// only prompts, loads, prints, and saves.
//
// Usage: loan-qualifier [RATE_SHEET] [--report PATH]

use anyhow::{bail, Result};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use loan_qualifier::{
    find_qualifying_loans, load_rate_sheet, prompt, save_rate_sheet, QualificationReport,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (sheet_path, report_path) = parse_args(&args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        sheet_path,
        report_path,
    )
}

/// Scan argv for the optional rate-sheet path and `--report PATH` flag.
/// Anything beyond one positional argument is a usage error, not a
/// silent override.
fn parse_args(args: &[String]) -> Result<(Option<String>, Option<String>)> {
    let mut sheet_path: Option<String> = None;
    let mut report_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--report" {
            if i + 1 >= args.len() {
                bail!("--report requires a file path");
            }
            report_path = Some(args[i + 1].clone());
            i += 2;
        } else {
            if sheet_path.is_some() {
                bail!(
                    "Unexpected argument: {} (usage: loan-qualifier [RATE_SHEET] [--report PATH])",
                    args[i]
                );
            }
            sheet_path = Some(args[i].clone());
            i += 1;
        }
    }

    Ok((sheet_path, report_path))
}

fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    sheet_path: Option<String>,
    report_path: Option<String>,
) -> Result<()> {
    // 1. Load the latest rate sheet
    let csv_path = match sheet_path {
        Some(path) => path,
        None => prompt::ask(input, output, "Enter a file path to a rate-sheet (.csv):")?,
    };

    if !Path::new(&csv_path).exists() {
        bail!("Oops! Can't find this path: {}", csv_path);
    }

    let offers = load_rate_sheet(&csv_path)?;
    writeln!(output, "✓ Loaded {} offers from {}", offers.len(), csv_path)?;

    // 2. Collect the applicant's information
    let applicant = prompt::get_applicant_info(input, output)?;

    // 3. Run the qualification pipeline
    let qualification = find_qualifying_loans(&offers, &applicant)?;

    writeln!(
        output,
        "The monthly debt to income ratio is {:.2}",
        qualification.monthly_debt_ratio
    )?;
    writeln!(
        output,
        "The loan to value ratio is {:.2}.",
        qualification.loan_to_value_ratio
    )?;
    writeln!(
        output,
        "Found {} qualifying loans",
        qualification.offers.len()
    )?;

    if let Some(path) = report_path {
        let report = QualificationReport::new(offers.len(), &qualification);
        report.save_json(&path)?;
        writeln!(output, "✓ Report written to {}", path)?;
    }

    // 4. An empty result is a normal outcome: report it and stop, no save
    if qualification.is_empty() {
        writeln!(output, "There are no qualifying loans.")?;
        return Ok(());
    }

    // 5. Save dialog
    let save = prompt::confirm(
        input,
        output,
        "Would you like to save the results to a CSV file? [y/n]",
    )?;

    if !save {
        writeln!(output, "Your files will not be saved.")?;
        return Ok(());
    }

    let out_path = prompt::ask(input, output, "Enter in the file path to save the CSV file.")?;
    save_rate_sheet(&out_path, &qualification.offers)?;
    writeln!(
        output,
        "✓ Saved {} qualifying loans to {}",
        qualification.offers.len(),
        out_path
    )?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("loan-qualifier")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_accepts_sheet_and_report() {
        let (sheet, report) =
            parse_args(&args(&["rates.csv", "--report", "run.json"])).unwrap();
        assert_eq!(sheet.as_deref(), Some("rates.csv"));
        assert_eq!(report.as_deref(), Some("run.json"));
    }

    #[test]
    fn test_parse_args_with_no_arguments() {
        let (sheet, report) = parse_args(&args(&[])).unwrap();
        assert!(sheet.is_none());
        assert!(report.is_none());
    }

    #[test]
    fn test_parse_args_rejects_second_positional() {
        let err = parse_args(&args(&["rates.csv", "extra.csv"])).unwrap_err();
        assert!(err.to_string().contains("Unexpected argument: extra.csv"));
    }

    #[test]
    fn test_parse_args_rejects_mistyped_flag() {
        // A typo'd flag must not silently replace the rate-sheet path
        let err = parse_args(&args(&["rates.csv", "--reprot", "run.json"])).unwrap_err();
        assert!(err.to_string().contains("Unexpected argument: --reprot"));
    }

    #[test]
    fn test_parse_args_rejects_report_without_path() {
        let err = parse_args(&args(&["rates.csv", "--report"])).unwrap_err();
        assert!(err.to_string().contains("--report requires a file path"));
    }
}
