//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation pipeline: monetary rounding,
//! progressive schedule evaluation, hourly and daily rate derivation, tiered
//! overtime and holiday allowances, attendance-based pay deductions,
//! social insurance and progressive income tax, and the per-employee and
//! batch aggregation that composes them.

mod allowances;
mod deductions;
mod payroll;
mod rates;
mod rounding;
mod schedule;
mod statutory;

pub use allowances::{
    calculate_allowances, holiday_allowance, holiday_late_night_allowance, late_night_allowance,
    regular_overtime_allowance,
};
pub use deductions::{
    TARDINESS_UNIT_DIVISOR, absence_deduction, calculate_pay_deductions, tardiness_deduction,
};
pub use payroll::{calculate_employee_payroll, process_payroll};
pub use rates::{daily_rate, hourly_rate};
pub use rounding::truncate;
pub use statutory::{calculate_statutory, income_tax, social_insurance, taxable_income};
