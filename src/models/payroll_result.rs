//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its itemized parts,
//! along with the [`BatchSummary`] accumulated across one run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// The four time-based allowances.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Allowances;
///
/// let allowances = Allowances::new(126_000, 5_000, 0, 0).unwrap();
/// assert_eq!(allowances.total, 131_000);
///
/// assert!(Allowances::new(i64::MAX, 1, 0, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowances {
    /// Tiered regular overtime allowance.
    pub regular_overtime: i64,
    /// Late-night premium.
    pub late_night: i64,
    /// Holiday work allowance.
    pub holiday_work: i64,
    /// Holiday late-night allowance.
    pub holiday_late_night: i64,
    /// Sum of the four components.
    pub total: i64,
}

impl Allowances {
    /// Creates the itemization, deriving the total.
    ///
    /// Returns `None` when the total overflows.
    pub fn new(
        regular_overtime: i64,
        late_night: i64,
        holiday_work: i64,
        holiday_late_night: i64,
    ) -> Option<Self> {
        let total = regular_overtime
            .checked_add(late_night)?
            .checked_add(holiday_work)?
            .checked_add(holiday_late_night)?;
        Some(Self {
            regular_overtime,
            late_night,
            holiday_work,
            holiday_late_night,
            total,
        })
    }
}

/// Attendance-based reductions of pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayDeductions {
    /// Absence deduction.
    pub absence: i64,
    /// Tardiness deduction.
    pub tardiness: i64,
    /// Sum of both components.
    pub total: i64,
}

impl PayDeductions {
    /// Creates the itemization, deriving the total. `None` on overflow.
    pub fn new(absence: i64, tardiness: i64) -> Option<Self> {
        Some(Self {
            absence,
            tardiness,
            total: absence.checked_add(tardiness)?,
        })
    }
}

/// Statutory withholdings computed from gross pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// Social insurance premium.
    pub social_insurance: i64,
    /// Income tax.
    pub income_tax: i64,
    /// Sum of both components.
    pub total: i64,
}

impl StatutoryDeductions {
    /// Creates the itemization, deriving the total. `None` on overflow.
    pub fn new(social_insurance: i64, income_tax: i64) -> Option<Self> {
        Some(Self {
            social_insurance,
            income_tax,
            total: social_insurance.checked_add(income_tax)?,
        })
    }
}

/// The fully itemized pay of one employee for one run.
///
/// Results are computed fresh each run and never mutated afterwards.
/// `gross_pay = base_salary + commute_allowance + allowances.total - deductions_from_pay.total`
/// and `net_pay = gross_pay - statutory_deductions.total` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    pub department: String,
    /// The employee's grade code.
    pub grade: String,
    /// Monthly base salary.
    pub base_salary: i64,
    /// Monthly commute allowance.
    pub commute_allowance: i64,
    /// Dependents claimed.
    pub dependents: u32,
    /// Hourly rate derived from base salary.
    pub hourly_rate: i64,
    /// The attendance the result was computed from.
    pub attendance: AttendanceSummary,
    /// Itemized allowances.
    pub allowances: Allowances,
    /// Itemized attendance-based deductions.
    pub deductions_from_pay: PayDeductions,
    /// Gross pay.
    pub gross_pay: i64,
    /// Itemized statutory deductions.
    pub statutory_deductions: StatutoryDeductions,
    /// Net pay.
    pub net_pay: i64,
}

impl PayrollResult {
    /// Checks both pay invariants.
    pub fn is_consistent(&self) -> bool {
        let gross = self
            .base_salary
            .checked_add(self.commute_allowance)
            .and_then(|v| v.checked_add(self.allowances.total))
            .and_then(|v| v.checked_sub(self.deductions_from_pay.total));
        let net = self
            .gross_pay
            .checked_sub(self.statutory_deductions.total);
        gross == Some(self.gross_pay) && net == Some(self.net_pay)
    }
}

/// Attendance echoed in a result, without the redundant employee id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Regular overtime hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub regular_overtime_hours: Decimal,
    /// Late-night overtime hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub late_night_overtime_hours: Decimal,
    /// Holiday work hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub holiday_work_hours: Decimal,
    /// Holiday late-night hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub holiday_late_night_hours: Decimal,
    /// Days absent.
    pub absence_days: u32,
    /// Tardiness occurrences.
    pub tardiness_count: u32,
}

impl From<&AttendanceRecord> for AttendanceSummary {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            regular_overtime_hours: record.regular_overtime_hours,
            late_night_overtime_hours: record.late_night_overtime_hours,
            holiday_work_hours: record.holiday_work_hours,
            holiday_late_night_hours: record.holiday_late_night_hours,
            absence_days: record.absence_days,
            tardiness_count: record.tardiness_count,
        }
    }
}

/// Aggregate totals across one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Sum of gross pay.
    pub total_gross_pay: i64,
    /// Sum of statutory deductions.
    pub total_deductions: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
    /// Number of employees supplied to the run.
    pub employee_count: usize,
}

impl BatchSummary {
    /// Starts an empty summary for a run over `employee_count` employees.
    pub fn for_employees(employee_count: usize) -> Self {
        Self {
            employee_count,
            ..Self::default()
        }
    }

    /// Returns the totals with one more result folded in, or `None` on overflow.
    pub fn checked_accumulate(&self, result: &PayrollResult) -> Option<Self> {
        Some(Self {
            total_gross_pay: self.total_gross_pay.checked_add(result.gross_pay)?,
            total_deductions: self
                .total_deductions
                .checked_add(result.statutory_deductions.total)?,
            total_net_pay: self.total_net_pay.checked_add(result.net_pay)?,
            employee_count: self.employee_count,
        })
    }
}

/// An employee excluded from a run, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEmployee {
    /// The employee's identifier.
    pub employee_id: String,
    /// Why the employee was skipped.
    pub reason: String,
}
