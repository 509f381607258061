//! Attendance-based pay deductions.
//!
//! Absence costs the daily rate per day and tardiness half the hourly rate per
//! occurrence. Once either count reaches its penalty threshold the penalty
//! multiplier applies to the whole product, not only to the excess.
//! Every function returns `None` when the amount overflows.

use rust_decimal::Decimal;

use crate::config::RateSchedule;
use crate::models::{AttendanceRecord, PayDeductions};

use super::{daily_rate, truncate};

/// Divisor of the hourly rate giving the per-occurrence tardiness unit.
pub const TARDINESS_UNIT_DIVISOR: i64 = 2;

/// Calculates the absence deduction.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::absence_deduction;
/// use payroll_engine::config::RateSchedule;
///
/// let schedule = RateSchedule::default();
/// assert_eq!(absence_deduction(200_000, 3, &schedule), Some(30_000));
/// // From day 4 the whole product is multiplied by 0.8
/// assert_eq!(absence_deduction(200_000, 4, &schedule), Some(32_000));
/// ```
pub fn absence_deduction(base_salary: i64, days: u32, schedule: &RateSchedule) -> Option<i64> {
    if days == 0 {
        return Some(0);
    }
    let daily = Decimal::from(daily_rate(base_salary, schedule)?);
    schedule.absence_penalty.apply(daily, days).and_then(truncate)
}

/// Calculates the tardiness deduction from the hourly rate.
pub fn tardiness_deduction(rate: i64, count: u32, schedule: &RateSchedule) -> Option<i64> {
    if count == 0 {
        return Some(0);
    }
    let half_rate = Decimal::from(rate)
        .checked_div(Decimal::from(TARDINESS_UNIT_DIVISOR))
        .and_then(truncate)?;
    schedule
        .tardiness_penalty
        .apply(Decimal::from(half_rate), count)
        .and_then(truncate)
}

/// Calculates both pay deductions for one attendance record.
pub fn calculate_pay_deductions(
    base_salary: i64,
    rate: i64,
    attendance: &AttendanceRecord,
    schedule: &RateSchedule,
) -> Option<PayDeductions> {
    PayDeductions::new(
        absence_deduction(base_salary, attendance.absence_days, schedule)?,
        tardiness_deduction(rate, attendance.tardiness_count, schedule)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> RateSchedule {
        RateSchedule::default()
    }

    #[test]
    fn test_no_absence_no_deduction() {
        assert_eq!(absence_deduction(200_000, 0, &schedule()), Some(0));
    }

    #[test]
    fn test_absence_up_to_three_days_is_straight_daily_rate() {
        assert_eq!(absence_deduction(200_000, 1, &schedule()), Some(10_000));
        assert_eq!(absence_deduction(200_000, 3, &schedule()), Some(30_000));
    }

    #[test]
    fn test_absence_penalty_starts_exactly_at_day_four() {
        assert_eq!(absence_deduction(200_000, 4, &schedule()), Some(32_000));
        assert_eq!(absence_deduction(200_000, 5, &schedule()), Some(40_000));
    }

    #[test]
    fn test_absence_uses_truncated_daily_rate() {
        // daily 10777 (215555 / 20), × 5 × 0.8 = 43108
        assert_eq!(absence_deduction(215_555, 5, &schedule()), Some(43_108));
    }

    #[test]
    fn test_no_tardiness_no_deduction() {
        assert_eq!(tardiness_deduction(2_000, 0, &schedule()), Some(0));
    }

    #[test]
    fn test_tardiness_below_threshold() {
        // half rate 1000 × 3
        assert_eq!(tardiness_deduction(2_000, 3, &schedule()), Some(3_000));
    }

    #[test]
    fn test_tardiness_penalty_at_four() {
        // 1000 × 4 × 1.5
        assert_eq!(tardiness_deduction(2_000, 4, &schedule()), Some(6_000));
    }

    #[test]
    fn test_tardiness_half_rate_is_truncated() {
        // rate 1563 → half 781, × 5 × 1.5 = 5857.5
        assert_eq!(tardiness_deduction(1_563, 5, &schedule()), Some(5_857));
    }

    #[test]
    fn test_calculate_pay_deductions_totals_components() {
        let mut attendance = AttendanceRecord::zero("E001");
        attendance.absence_days = 2;
        attendance.tardiness_count = 4;

        let deductions = calculate_pay_deductions(200_000, 1_250, &attendance, &schedule()).unwrap();
        assert_eq!(deductions.absence, 20_000);
        // half rate 625 × 4 × 1.5
        assert_eq!(deductions.tardiness, 3_750);
        assert_eq!(deductions.total, 23_750);
    }

    #[test]
    fn test_overflowing_deductions_yield_none() {
        // daily rate about 4.6e17, × 31 × 0.8 is past i64::MAX
        let daily_max = i64::MAX / 20 * 20;
        assert_eq!(absence_deduction(daily_max, 31, &schedule()), None);
        assert_eq!(tardiness_deduction(i64::MAX, 31, &schedule()), None);

        let mut attendance = AttendanceRecord::zero("E001");
        attendance.absence_days = 31;
        assert_eq!(calculate_pay_deductions(daily_max, 0, &attendance, &schedule()), None);
    }
}
