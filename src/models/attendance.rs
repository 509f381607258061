//! Attendance records.
//!
//! One record per employee per run. Every measure is optional in input
//! documents and defaults to zero, and a missing record is equivalent to
//! [`AttendanceRecord::zero`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A month of attendance for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Regular overtime hours.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub regular_overtime_hours: Decimal,
    /// Late-night overtime hours.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub late_night_overtime_hours: Decimal,
    /// Hours worked on holidays.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub holiday_work_hours: Decimal,
    /// Late-night hours worked on holidays.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub holiday_late_night_hours: Decimal,
    /// Days absent.
    #[serde(default)]
    pub absence_days: u32,
    /// Occurrences of tardiness or early leave.
    #[serde(default)]
    pub tardiness_count: u32,
}

impl AttendanceRecord {
    /// An all-zero record for an employee with no attendance data.
    pub fn zero(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            ..Self::default()
        }
    }

    /// The four hours measures, paired with their field names.
    pub fn hours_fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("regular_overtime_hours", self.regular_overtime_hours),
            ("late_night_overtime_hours", self.late_night_overtime_hours),
            ("holiday_work_hours", self.holiday_work_hours),
            ("holiday_late_night_hours", self.holiday_late_night_hours),
        ]
    }

    /// Returns the name of the first negative hours field, if any.
    pub fn first_negative_field(&self) -> Option<&'static str> {
        self.hours_fields()
            .into_iter()
            .find(|(_, hours)| hours.is_sign_negative() && !hours.is_zero())
            .map(|(field, _)| field)
    }
}
