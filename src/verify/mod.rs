//! Comparison of calculated results against expected results.
//!
//! Verification is read-only: it compares gross pay, net pay and the
//! statutory deduction total per employee for exact equality and reports
//! PASS only when every calculated employee matches.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{PayrollOutput, PayrollResult};

/// Outcome for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    /// All compared figures match.
    Ok,
    /// At least one compared figure differs.
    Mismatch,
    /// No expected result exists for the employee.
    Error,
}

/// Overall outcome of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    /// No errors.
    Pass,
    /// One or more errors.
    Fail,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Pass => write!(f, "PASS"),
            VerificationStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Verification outcome for one calculated employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's name, when an expected result was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// Outcome for this employee.
    pub status: EntryStatus,
    /// One line per mismatching figure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Explanation when status is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Gross pay, reported for matching employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_pay: Option<i64>,
    /// Net pay, reported for matching employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_pay: Option<i64>,
}

/// The full verification report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// One entry per calculated employee, in calculated order.
    pub verification_results: Vec<VerificationEntry>,
    /// Number of calculated employees.
    pub total_employees: usize,
    /// Number of missing employees plus mismatching figures.
    pub total_errors: usize,
    /// PASS when `total_errors` is zero.
    pub status: VerificationStatus,
}

impl VerificationReport {
    /// Returns true when verification passed.
    pub fn passed(&self) -> bool {
        self.status == VerificationStatus::Pass
    }
}

/// Compares calculated results against expected results by employee id.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::PayrollOutput;
/// use payroll_engine::verify::verify_results;
///
/// let report = verify_results(&PayrollOutput::default(), &PayrollOutput::default());
/// assert!(report.passed());
/// assert_eq!(report.total_employees, 0);
/// ```
pub fn verify_results(calculated: &PayrollOutput, expected: &PayrollOutput) -> VerificationReport {
    let expected_by_id: HashMap<&str, &PayrollResult> = expected
        .results
        .iter()
        .map(|r| (r.employee_id.as_str(), r))
        .collect();

    let mut entries = Vec::with_capacity(calculated.results.len());
    let mut total_errors = 0;

    for calc in &calculated.results {
        let Some(exp) = expected_by_id.get(calc.employee_id.as_str()) else {
            total_errors += 1;
            entries.push(VerificationEntry {
                employee_id: calc.employee_id.clone(),
                employee_name: None,
                status: EntryStatus::Error,
                errors: vec![],
                message: Some("Expected data not found".to_string()),
                gross_pay: None,
                net_pay: None,
            });
            continue;
        };

        let errors = compare(calc, exp);
        total_errors += errors.len();

        let entry = if errors.is_empty() {
            VerificationEntry {
                employee_id: calc.employee_id.clone(),
                employee_name: Some(calc.employee_name.clone()),
                status: EntryStatus::Ok,
                errors,
                message: None,
                gross_pay: Some(calc.gross_pay),
                net_pay: Some(calc.net_pay),
            }
        } else {
            VerificationEntry {
                employee_id: calc.employee_id.clone(),
                employee_name: Some(calc.employee_name.clone()),
                status: EntryStatus::Mismatch,
                errors,
                message: None,
                gross_pay: None,
                net_pay: None,
            }
        };
        entries.push(entry);
    }

    let status = if total_errors == 0 {
        VerificationStatus::Pass
    } else {
        VerificationStatus::Fail
    };

    info!(
        employees = calculated.results.len(),
        errors = total_errors,
        status = %status,
        "Verification completed"
    );

    VerificationReport {
        verification_results: entries,
        total_employees: calculated.results.len(),
        total_errors,
        status,
    }
}

fn compare(calc: &PayrollResult, exp: &PayrollResult) -> Vec<String> {
    [
        ("Gross pay", calc.gross_pay, exp.gross_pay),
        ("Net pay", calc.net_pay, exp.net_pay),
        (
            "Deductions",
            calc.statutory_deductions.total,
            exp.statutory_deductions.total,
        ),
    ]
    .into_iter()
    .filter(|(_, c, e)| c != e)
    .map(|(label, c, e)| {
        format!(
            "{}: calc={}, exp={}",
            label,
            format_amount(c),
            format_amount(e)
        )
    })
    .collect()
}

/// Formats an amount with thousands separators.
///
/// ```
/// use payroll_engine::verify::format_amount;
///
/// assert_eq!(format_amount(1_234_567), "1,234,567");
/// assert_eq!(format_amount(-4_500), "-4,500");
/// assert_eq!(format_amount(999), "999");
/// ```
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

const RULE: &str = "============================================================";

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Verification Report")?;
        writeln!(f, "{RULE}")?;

        for entry in &self.verification_results {
            writeln!(f)?;
            writeln!(
                f,
                "[{} {}]",
                entry.employee_id,
                entry.employee_name.as_deref().unwrap_or("")
            )?;
            match entry.status {
                EntryStatus::Ok => writeln!(
                    f,
                    "  OK - Gross: {}, Net: {}",
                    format_amount(entry.gross_pay.unwrap_or_default()),
                    format_amount(entry.net_pay.unwrap_or_default())
                )?,
                EntryStatus::Mismatch => {
                    writeln!(f, "  MISMATCH:")?;
                    for error in &entry.errors {
                        writeln!(f, "    - {error}")?;
                    }
                }
                EntryStatus::Error => {
                    writeln!(f, "  {}", entry.message.as_deref().unwrap_or("ERROR"))?
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Result: {}", self.status)?;
        writeln!(f, "Employees: {}", self.total_employees)?;
        writeln!(f, "Errors: {}", self.total_errors)?;
        write!(f, "{RULE}")
    }
}
