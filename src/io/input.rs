//! Input document loading and validation.
//!
//! Validation happens here, before any record reaches the calculators: the
//! calculation pipeline assumes non-negative amounts and at most one
//! attendance record per employee. Amounts and counts are also capped so a
//! valid record cannot overflow the money arithmetic.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollInput, PayrollOutput};

/// Largest accepted salary, commute allowance or base deduction.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Largest accepted value of any hours measure: the hours in a 31-day month.
pub const MAX_MONTHLY_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// Largest accepted absence day count.
pub const MAX_ABSENCE_DAYS: u32 = 31;

/// Largest accepted tardiness count, one per hour of the month.
pub const MAX_TARDINESS_COUNT: u32 = 744;

/// Reads, parses and validates a JSON input document.
///
/// # Errors
///
/// - [`EngineError::InputNotFound`] when the file cannot be read
/// - [`EngineError::InputParseError`] for malformed JSON or missing fields
/// - [`EngineError::InvalidRecord`] for records failing [`validate_input`]
pub fn load_input<P: AsRef<Path>>(path: P) -> EngineResult<PayrollInput> {
    let path = path.as_ref();
    let input: PayrollInput = read_json(path)?;
    validate_input(&input)?;

    info!(
        path = %path.display(),
        employees = input.employees.len(),
        attendance_records = input.attendance.len(),
        "Loaded payroll input"
    );

    Ok(input)
}

/// Reads a previously written output document, for reporting or verification.
pub fn load_output<P: AsRef<Path>>(path: P) -> EngineResult<PayrollOutput> {
    read_json(path.as_ref())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
        path: path_str.clone(),
    })?;

    serde_json::from_str(&content).map_err(|e| EngineError::InputParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Rejects malformed records.
///
/// Fails on duplicate employee ids, salary or commute allowance outside
/// `0..=MAX_AMOUNT`, insurance rates outside `0..=1`, base deductions outside
/// `0..=MAX_AMOUNT`, attendance measures that are negative or above their
/// monthly cap, and more than one attendance record per employee. Attendance
/// for an unknown employee is logged and otherwise ignored.
pub fn validate_input(input: &PayrollInput) -> EngineResult<()> {
    let mut employee_ids = HashSet::new();
    for employee in &input.employees {
        if !employee_ids.insert(employee.id.as_str()) {
            return Err(invalid(&employee.id, "id", "duplicate employee id"));
        }
        if employee.base_salary < 0 {
            return Err(invalid(&employee.id, "base_salary", "must not be negative"));
        }
        if employee.base_salary > MAX_AMOUNT {
            return Err(invalid(&employee.id, "base_salary", &too_large(MAX_AMOUNT)));
        }
        if employee.commute_allowance < 0 {
            return Err(invalid(
                &employee.id,
                "commute_allowance",
                "must not be negative",
            ));
        }
        if employee.commute_allowance > MAX_AMOUNT {
            return Err(invalid(
                &employee.id,
                "commute_allowance",
                &too_large(MAX_AMOUNT),
            ));
        }
    }

    for (code, grade) in &input.grade_table {
        if grade.insurance_rate < Decimal::ZERO || grade.insurance_rate > Decimal::ONE {
            return Err(EngineError::InvalidRecord {
                employee_id: String::new(),
                field: format!("grade_table.{code}.insurance_rate"),
                message: "must be between 0 and 1".to_string(),
            });
        }
        if !(0..=MAX_AMOUNT).contains(&grade.base_deduction) {
            return Err(EngineError::InvalidRecord {
                employee_id: String::new(),
                field: format!("grade_table.{code}.base_deduction"),
                message: format!("must be between 0 and {}", MAX_AMOUNT),
            });
        }
    }

    let mut seen_attendance = HashSet::new();
    for record in &input.attendance {
        if !seen_attendance.insert(record.employee_id.as_str()) {
            return Err(invalid(
                &record.employee_id,
                "attendance",
                "more than one attendance record",
            ));
        }
        if let Some(field) = record.first_negative_field() {
            return Err(invalid(&record.employee_id, field, "must not be negative"));
        }
        if let Some((field, _)) = record
            .hours_fields()
            .into_iter()
            .find(|(_, hours)| *hours > MAX_MONTHLY_HOURS)
        {
            return Err(invalid(
                &record.employee_id,
                field,
                &too_large(MAX_MONTHLY_HOURS),
            ));
        }
        if record.absence_days > MAX_ABSENCE_DAYS {
            return Err(invalid(
                &record.employee_id,
                "absence_days",
                &too_large(MAX_ABSENCE_DAYS),
            ));
        }
        if record.tardiness_count > MAX_TARDINESS_COUNT {
            return Err(invalid(
                &record.employee_id,
                "tardiness_count",
                &too_large(MAX_TARDINESS_COUNT),
            ));
        }
        if !employee_ids.contains(record.employee_id.as_str()) {
            warn!(
                employee_id = %record.employee_id,
                "Ignoring attendance for unknown employee"
            );
        }
    }

    Ok(())
}

fn too_large(limit: impl std::fmt::Display) -> String {
    format!("must not exceed {}", limit)
}

fn invalid(employee_id: &str, field: &str, message: &str) -> EngineError {
    EngineError::InvalidRecord {
        employee_id: employee_id.to_string(),
        field: field.to_string(),
        message: message.to_string(),
    }
}
