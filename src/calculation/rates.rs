//! Hourly and daily rate derivation.

use rust_decimal::Decimal;

use crate::config::RateSchedule;

use super::truncate;

/// Derives the hourly rate: base salary over standard monthly hours, truncated.
///
/// Returns `None` when the rate does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use payroll_engine::config::RateSchedule;
///
/// assert_eq!(hourly_rate(320_000, &RateSchedule::default()), Some(2_000));
/// assert_eq!(hourly_rate(250_000, &RateSchedule::default()), Some(1_562));
/// ```
pub fn hourly_rate(base_salary: i64, schedule: &RateSchedule) -> Option<i64> {
    Decimal::from(base_salary)
        .checked_div(schedule.standard_monthly_hours)
        .and_then(truncate)
}

/// Derives the daily rate: base salary over standard monthly days, truncated.
pub fn daily_rate(base_salary: i64, schedule: &RateSchedule) -> Option<i64> {
    Decimal::from(base_salary)
        .checked_div(schedule.standard_monthly_days)
        .and_then(truncate)
}
