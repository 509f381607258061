//! Per-employee payroll composition and batch processing.
//!
//! The pipeline for one employee runs in a fixed order:
//! rates → allowances → pay deductions → gross pay → statutory deductions → net pay.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::RateSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceSummary, BatchSummary, Employee, GradeTable, PayrollInput,
    PayrollOutput, PayrollResult, SkippedEmployee,
};

use super::{calculate_allowances, calculate_pay_deductions, calculate_statutory, hourly_rate};

/// Computes the fully itemized pay of one employee.
///
/// # Errors
///
/// Returns [`EngineError::GradeNotFound`] when the employee's grade is not in
/// `grade_table`, and [`EngineError::CalculationError`] when an amount no
/// longer fits in `i64`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_employee_payroll;
/// use payroll_engine::config::RateSchedule;
/// use payroll_engine::models::{AttendanceRecord, Employee, GradeInfo, GradeTable};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "E001".to_string(),
///     name: "Tanaka Taro".to_string(),
///     department: "Sales".to_string(),
///     grade: "G3".to_string(),
///     base_salary: 320_000,
///     commute_allowance: 10_000,
///     dependents: 1,
/// };
/// let mut attendance = AttendanceRecord::zero("E001");
/// attendance.regular_overtime_hours = Decimal::from(50);
///
/// let mut grades = GradeTable::new();
/// grades.insert(
///     "G3".to_string(),
///     GradeInfo { insurance_rate: Decimal::new(1, 1), base_deduction: 50_000 },
/// );
///
/// let result =
///     calculate_employee_payroll(&employee, &attendance, &grades, &RateSchedule::default())
///         .unwrap();
/// assert_eq!(result.gross_pay, 456_000);
/// assert_eq!(result.net_pay, 382_345);
/// ```
pub fn calculate_employee_payroll(
    employee: &Employee,
    attendance: &AttendanceRecord,
    grade_table: &GradeTable,
    schedule: &RateSchedule,
) -> EngineResult<PayrollResult> {
    let grade = grade_table
        .get(&employee.grade)
        .ok_or_else(|| EngineError::GradeNotFound {
            employee_id: employee.id.clone(),
            grade: employee.grade.clone(),
        })?;

    let rate = hourly_rate(employee.base_salary, schedule)
        .ok_or_else(|| overflow(employee, "hourly rate"))?;
    let allowances = calculate_allowances(rate, attendance, schedule)
        .ok_or_else(|| overflow(employee, "allowances"))?;
    let deductions_from_pay =
        calculate_pay_deductions(employee.base_salary, rate, attendance, schedule)
            .ok_or_else(|| overflow(employee, "pay deductions"))?;

    let gross_pay = employee
        .base_salary
        .checked_add(employee.commute_allowance)
        .and_then(|v| v.checked_add(allowances.total))
        .and_then(|v| v.checked_sub(deductions_from_pay.total))
        .ok_or_else(|| overflow(employee, "gross pay"))?;

    let statutory_deductions = calculate_statutory(
        gross_pay,
        employee.commute_allowance,
        employee.dependents,
        grade,
        schedule,
    )
    .ok_or_else(|| overflow(employee, "statutory deductions"))?;
    let net_pay = gross_pay
        .checked_sub(statutory_deductions.total)
        .ok_or_else(|| overflow(employee, "net pay"))?;

    Ok(PayrollResult {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        department: employee.department.clone(),
        grade: employee.grade.clone(),
        base_salary: employee.base_salary,
        commute_allowance: employee.commute_allowance,
        dependents: employee.dependents,
        hourly_rate: rate,
        attendance: AttendanceSummary::from(attendance),
        allowances,
        deductions_from_pay,
        gross_pay,
        statutory_deductions,
        net_pay,
    })
}

fn overflow(employee: &Employee, step: &str) -> EngineError {
    EngineError::CalculationError {
        employee_id: employee.id.clone(),
        message: format!("{} overflowed", step),
    }
}

/// Runs payroll over a whole batch.
///
/// Employees without an attendance record are paid as if every attendance
/// measure were zero. Employees whose computation fails are skipped, logged,
/// and listed in [`PayrollOutput::skipped`]; the rest of the batch continues.
/// `summary.employee_count` is the number of employees supplied.
pub fn process_payroll(input: &PayrollInput, schedule: &RateSchedule) -> PayrollOutput {
    info!(
        employees = input.employees.len(),
        attendance_records = input.attendance.len(),
        grades = input.grade_table.len(),
        "Starting payroll run"
    );

    let mut attendance_by_employee: HashMap<&str, &AttendanceRecord> = HashMap::new();
    for record in &input.attendance {
        attendance_by_employee
            .entry(record.employee_id.as_str())
            .or_insert(record);
    }

    let mut results = Vec::with_capacity(input.employees.len());
    let mut skipped = Vec::new();
    let mut summary = BatchSummary::for_employees(input.employees.len());

    for employee in &input.employees {
        let zero;
        let attendance = match attendance_by_employee.get(employee.id.as_str()) {
            Some(record) => *record,
            None => {
                zero = AttendanceRecord::zero(employee.id.as_str());
                &zero
            }
        };

        let computed = calculate_employee_payroll(employee, attendance, &input.grade_table, schedule)
            .and_then(|result| {
                let totals = summary
                    .checked_accumulate(&result)
                    .ok_or_else(|| overflow(employee, "batch totals"))?;
                Ok((result, totals))
            });

        match computed {
            Ok((result, totals)) => {
                debug!(
                    employee_id = %result.employee_id,
                    gross_pay = result.gross_pay,
                    net_pay = result.net_pay,
                    "Computed payroll"
                );
                summary = totals;
                results.push(result);
            }
            Err(err) => {
                let employee_id = err.employee_id().unwrap_or(&employee.id).to_string();
                warn!(employee_id = %employee_id, error = %err, "Skipping employee");
                skipped.push(SkippedEmployee {
                    employee_id,
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        computed = results.len(),
        skipped = skipped.len(),
        total_gross_pay = summary.total_gross_pay,
        total_net_pay = summary.total_net_pay,
        "Payroll run completed"
    );

    PayrollOutput {
        results,
        summary,
        grade_table: input.grade_table.clone(),
        skipped,
    }
}
