//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod document;
mod employee;
mod grade;
mod payroll_result;

pub use attendance::AttendanceRecord;
pub use document::{PayrollInput, PayrollOutput};
pub use employee::Employee;
pub use grade::{GradeInfo, GradeTable};
pub use payroll_result::{
    Allowances, AttendanceSummary, BatchSummary, PayDeductions, PayrollResult, SkippedEmployee,
    StatutoryDeductions,
};
