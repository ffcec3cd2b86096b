// 💬 Prompt Dialog - Applicant input collector
// Thin console dialog around the core: asks the questions, coerces the
// answers, and hands back an ApplicantProfile. Reads from any BufRead and
// writes to any Write so the dialog is testable with in-memory buffers.

use crate::error::QualifierError;
use crate::pipeline::ApplicantProfile;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Ask one question and return the trimmed answer
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{} ", question).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read answer")?;
    Ok(answer.trim().to_string())
}

/// Ask one question and coerce the answer to a number.
///
/// A non-numeric answer aborts the run immediately; there is no re-prompt.
pub fn ask_numeric<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    field: &str,
) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let answer = ask(input, output, question)?;
    let value = answer
        .parse::<T>()
        .map_err(|_| QualifierError::input_format(field, &answer))?;
    Ok(value)
}

/// Ask a yes/no question; "y" or "yes" (any case) counts as yes
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let answer = ask(input, output, question)?;
    let answer = answer.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Prompt dialog for the applicant's financial information
pub fn get_applicant_info<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ApplicantProfile> {
    let credit_score =
        ask_numeric::<u32, _, _>(input, output, "What's your credit score?", "credit score")?;
    let monthly_debt = ask_numeric::<f64, _, _>(
        input,
        output,
        "What's your current amount of monthly debt?",
        "monthly debt",
    )?;
    let monthly_income = ask_numeric::<f64, _, _>(
        input,
        output,
        "What's your total monthly income?",
        "monthly income",
    )?;
    let loan_amount = ask_numeric::<f64, _, _>(
        input,
        output,
        "What's your desired loan amount?",
        "loan amount",
    )?;
    let home_value =
        ask_numeric::<f64, _, _>(input, output, "What's your home value?", "home value")?;

    Ok(ApplicantProfile {
        credit_score,
        monthly_debt,
        monthly_income,
        loan_amount,
        home_value,
    })
}

// ============================================================================
// TESTS
// ============================================================================
