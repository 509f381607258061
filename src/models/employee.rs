//! Employee model.
//!
//! This module defines the Employee struct for representing the workers
//! whose monthly pay is computed.

use serde::{Deserialize, Serialize};

/// Represents an employee included in a payroll run.
///
/// Employees are immutable for the duration of a run. Monetary fields are
/// whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Grade code, a key into the grade table.
    pub grade: String,
    /// Monthly base salary.
    pub base_salary: i64,
    /// Monthly commute allowance, excluded from the insurable base.
    pub commute_allowance: i64,
    /// Number of dependents claimed for income tax.
    #[serde(default)]
    pub dependents: u32,
}
