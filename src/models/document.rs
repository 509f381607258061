//! Batch input and output documents.

use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, BatchSummary, Employee, GradeTable, PayrollResult, SkippedEmployee};

/// Everything one payroll run consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Employees to pay.
    pub employees: Vec<Employee>,
    /// Attendance records, at most one per employee.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Grade parameters shared by all employees.
    pub grade_table: GradeTable,
}

/// Everything one payroll run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollOutput {
    /// One result per successfully computed employee, in input order.
    pub results: Vec<PayrollResult>,
    /// Totals across `results`.
    pub summary: BatchSummary,
    /// The grade table the run used.
    pub grade_table: GradeTable,
    /// Employees excluded from the run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEmployee>,
}
