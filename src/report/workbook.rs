//! Workbook layout for payroll reports.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::io::write_atomically;
use crate::models::PayrollOutput;

/// Sheet names in workbook order.
pub const SHEET_NAMES: [&str; 6] = [
    "Master",
    "Attendance",
    "Allowances",
    "Deductions",
    "Payslip",
    "Verification",
];

/// Renders `output` as a workbook and writes it to `path`.
///
/// The workbook is serialized in memory and written atomically, so a failed
/// write leaves no partial file at `path`.
pub fn write_workbook<P: AsRef<Path>>(path: P, output: &PayrollOutput) -> EngineResult<()> {
    let path = path.as_ref();
    let to_error = |e: XlsxError| EngineError::OutputWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut workbook = build_workbook(output).map_err(to_error)?;
    let buffer = workbook.save_to_buffer().map_err(to_error)?;
    write_atomically(path, &buffer)?;

    info!(
        path = %path.display(),
        employees = output.results.len(),
        "Wrote payroll workbook"
    );
    Ok(())
}

/// Builds the in-memory workbook for `output`.
pub fn build_workbook(output: &PayrollOutput) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[0])?;
    write_master(sheet, output, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[1])?;
    write_attendance(sheet, output, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[2])?;
    write_allowances(sheet, output, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[3])?;
    write_deductions(sheet, output, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[4])?;
    write_payslip(sheet, output, &bold)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[5])?;
    write_verification(sheet, output, &bold)?;

    Ok(workbook)
}

fn write_headers(sheet: &mut Worksheet, row: u32, headers: &[&str], bold: &Format) -> Result<(), XlsxError> {
    for (col, header) in (0u16..).zip(headers) {
        sheet.write_string_with_format(row, col, *header, bold)?;
    }
    Ok(())
}

fn write_amounts(sheet: &mut Worksheet, row: u32, first_col: u16, amounts: &[i64]) -> Result<(), XlsxError> {
    for (col, amount) in (first_col..).zip(amounts) {
        sheet.write_number(row, col, *amount as f64)?;
    }
    Ok(())
}

fn hours(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn write_master(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &["ID", "Name", "Department", "Grade", "Base Salary", "Commute", "Dependents"],
        bold,
    )?;

    let mut row = 1;
    for result in &output.results {
        sheet.write_string(row, 0, &result.employee_id)?;
        sheet.write_string(row, 1, &result.employee_name)?;
        sheet.write_string(row, 2, &result.department)?;
        sheet.write_string(row, 3, &result.grade)?;
        write_amounts(sheet, row, 4, &[result.base_salary, result.commute_allowance])?;
        sheet.write_number(row, 6, f64::from(result.dependents))?;
        row += 1;
    }

    // grade block starts after one blank row
    row += 1;
    sheet.write_string_with_format(row, 0, "Grade Table", bold)?;
    row += 1;
    write_headers(sheet, row, &["Grade", "Insurance Rate", "Base Deduction"], bold)?;
    row += 1;
    for (grade, info) in &output.grade_table {
        sheet.write_string(row, 0, grade)?;
        sheet.write_number(row, 1, hours(info.insurance_rate))?;
        sheet.write_number(row, 2, info.base_deduction as f64)?;
        row += 1;
    }
    Ok(())
}

fn write_attendance(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &[
            "ID",
            "Regular OT Hours",
            "Late Night Hours",
            "Holiday Hours",
            "Holiday Late Night Hours",
            "Absence Days",
            "Tardiness Count",
        ],
        bold,
    )?;

    for (row, result) in (1u32..).zip(&output.results) {
        let attendance = &result.attendance;
        sheet.write_string(row, 0, &result.employee_id)?;
        sheet.write_number(row, 1, hours(attendance.regular_overtime_hours))?;
        sheet.write_number(row, 2, hours(attendance.late_night_overtime_hours))?;
        sheet.write_number(row, 3, hours(attendance.holiday_work_hours))?;
        sheet.write_number(row, 4, hours(attendance.holiday_late_night_hours))?;
        sheet.write_number(row, 5, f64::from(attendance.absence_days))?;
        sheet.write_number(row, 6, f64::from(attendance.tardiness_count))?;
    }
    Ok(())
}

fn write_allowances(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &["ID", "Hourly Rate", "Regular OT", "Late Night", "Holiday", "Holiday Late Night", "Total"],
        bold,
    )?;

    for (row, result) in (1u32..).zip(&output.results) {
        let a = &result.allowances;
        sheet.write_string(row, 0, &result.employee_id)?;
        write_amounts(
            sheet,
            row,
            1,
            &[
                result.hourly_rate,
                a.regular_overtime,
                a.late_night,
                a.holiday_work,
                a.holiday_late_night,
                a.total,
            ],
        )?;
    }
    Ok(())
}

fn write_deductions(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &[
            "ID",
            "Absence",
            "Tardiness",
            "Total Deduct",
            "Social Ins",
            "Income Tax",
            "Statutory Total",
        ],
        bold,
    )?;

    for (row, result) in (1u32..).zip(&output.results) {
        let pay = &result.deductions_from_pay;
        let statutory = &result.statutory_deductions;
        sheet.write_string(row, 0, &result.employee_id)?;
        write_amounts(
            sheet,
            row,
            1,
            &[
                pay.absence,
                pay.tardiness,
                pay.total,
                statutory.social_insurance,
                statutory.income_tax,
                statutory.total,
            ],
        )?;
    }
    Ok(())
}

fn write_payslip(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &[
            "ID",
            "Name",
            "Base Salary",
            "Allowances",
            "Deductions",
            "Gross Pay",
            "Statutory",
            "Net Pay",
        ],
        bold,
    )?;

    let mut row = 1;
    for result in &output.results {
        sheet.write_string(row, 0, &result.employee_id)?;
        sheet.write_string(row, 1, &result.employee_name)?;
        write_amounts(
            sheet,
            row,
            2,
            &[
                result.base_salary,
                result.allowances.total,
                result.deductions_from_pay.total,
                result.gross_pay,
                result.statutory_deductions.total,
                result.net_pay,
            ],
        )?;
        row += 1;
    }

    // `row` is now the zero-based TOTAL row, which is also the one-based last data row
    sheet.write_string_with_format(row, 0, "TOTAL", bold)?;
    for (col, letter) in [(5u16, 'F'), (6, 'G'), (7, 'H')] {
        sheet.write_formula(row, col, format!("=SUM({letter}2:{letter}{row})").as_str())?;
    }
    Ok(())
}

fn write_verification(sheet: &mut Worksheet, output: &PayrollOutput, bold: &Format) -> Result<(), XlsxError> {
    write_headers(
        sheet,
        0,
        &["ID", "Name", "Expected Net", "Calculated Net", "Difference", "Status"],
        bold,
    )?;

    for (row, result) in (1u32..).zip(&output.results) {
        let excel_row = row + 1;
        sheet.write_string(row, 0, &result.employee_id)?;
        sheet.write_string(row, 1, &result.employee_name)?;
        sheet.write_number(row, 2, result.net_pay as f64)?;
        sheet.write_formula(row, 3, format!("=Payslip!H{excel_row}").as_str())?;
        sheet.write_formula(row, 4, format!("=C{excel_row}-D{excel_row}").as_str())?;
        sheet.write_formula(
            row,
            5,
            format!("=IF(E{excel_row}=0,\"OK\",\"ERROR\")").as_str(),
        )?;
    }
    Ok(())
}
