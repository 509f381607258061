//! Time-based allowance calculation.
//!
//! ## Rate Structure
//!
//! - Regular overtime is graduated: 125% up to 45 hours, 135% from 45 to
//!   60 hours, 150% beyond 60 hours. Each multiplier applies only to the
//!   hours inside its tier.
//! - Late-night hours earn a flat 25% premium, added on top of whatever the
//!   hours are otherwise paid.
//! - Holiday work is paid at 135%, holiday late-night at 135% + 25%.
//!
//! Every function returns zero when its hours are zero or negative, and
//! `None` when the amount overflows.

use rust_decimal::Decimal;

use crate::config::RateSchedule;
use crate::models::{Allowances, AttendanceRecord};

use super::truncate;

/// Calculates the tiered regular overtime allowance.
///
/// The weighted hours of every tier are summed before the single final
/// truncation, so the result never loses a unit to per-tier rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::regular_overtime_allowance;
/// use payroll_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::default();
///
/// // 40 hours, all in the first tier: 2000 × 1.25 × 40
/// assert_eq!(regular_overtime_allowance(2_000, Decimal::from(40), &schedule), Some(100_000));
///
/// // 50 hours: 2000 × 1.25 × 45 + 2000 × 1.35 × 5
/// assert_eq!(regular_overtime_allowance(2_000, Decimal::from(50), &schedule), Some(126_000));
/// ```
pub fn regular_overtime_allowance(rate: i64, hours: Decimal, schedule: &RateSchedule) -> Option<i64> {
    if hours <= Decimal::ZERO {
        return Some(0);
    }
    let weighted_hours = schedule.overtime_tiers.graduated(hours)?;
    Decimal::from(rate)
        .checked_mul(weighted_hours)
        .and_then(truncate)
}

/// Calculates the late-night premium.
pub fn late_night_allowance(rate: i64, hours: Decimal, schedule: &RateSchedule) -> Option<i64> {
    flat_allowance(rate, schedule.late_night_premium, hours)
}

/// Calculates the holiday work allowance.
pub fn holiday_allowance(rate: i64, hours: Decimal, schedule: &RateSchedule) -> Option<i64> {
    flat_allowance(rate, schedule.holiday_multiplier, hours)
}

/// Calculates the holiday late-night allowance (holiday multiplier plus late-night premium).
pub fn holiday_late_night_allowance(rate: i64, hours: Decimal, schedule: &RateSchedule) -> Option<i64> {
    let multiplier = schedule
        .holiday_multiplier
        .checked_add(schedule.late_night_premium)?;
    flat_allowance(rate, multiplier, hours)
}

/// `truncate(rate × multiplier × hours)`, zero for non-positive hours.
fn flat_allowance(rate: i64, multiplier: Decimal, hours: Decimal) -> Option<i64> {
    if hours <= Decimal::ZERO {
        return Some(0);
    }
    Decimal::from(rate)
        .checked_mul(multiplier)?
        .checked_mul(hours)
        .and_then(truncate)
}

/// Calculates all four allowances for one attendance record.
///
/// Returns `None` when any component or the total overflows.
pub fn calculate_allowances(
    rate: i64,
    attendance: &AttendanceRecord,
    schedule: &RateSchedule,
) -> Option<Allowances> {
    Allowances::new(
        regular_overtime_allowance(rate, attendance.regular_overtime_hours, schedule)?,
        late_night_allowance(rate, attendance.late_night_overtime_hours, schedule)?,
        holiday_allowance(rate, attendance.holiday_work_hours, schedule)?,
        holiday_late_night_allowance(rate, attendance.holiday_late_night_hours, schedule)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> RateSchedule {
        RateSchedule::default()
    }

    // ==========================================================================
    // Regular overtime tiers
    // ==========================================================================

    #[test]
    fn test_regular_overtime_first_tier() {
        assert_eq!(regular_overtime_allowance(2_000, dec("10"), &schedule()), Some(25_000));
    }

    #[test]
    fn test_regular_overtime_at_45_hours() {
        assert_eq!(regular_overtime_allowance(2_000, dec("45"), &schedule()), Some(112_500));
    }

    #[test]
    fn test_regular_overtime_second_tier() {
        assert_eq!(regular_overtime_allowance(2_000, dec("50"), &schedule()), Some(126_000));
    }

    #[test]
    fn test_regular_overtime_at_60_hours() {
        // 112500 + 2000 × 1.35 × 15
        assert_eq!(regular_overtime_allowance(2_000, dec("60"), &schedule()), Some(153_000));
    }

    #[test]
    fn test_regular_overtime_just_past_45_hours() {
        // 100000 × (56.25 + 1.35 × 0.0001) = 5625013.5
        assert_eq!(regular_overtime_allowance(100_000, dec("45"), &schedule()), Some(5_625_000));
        assert_eq!(
            regular_overtime_allowance(100_000, dec("45.0001"), &schedule()),
            Some(5_625_013)
        );
        // below one unit of increase the result holds steady
        assert_eq!(regular_overtime_allowance(2_000, dec("45.0001"), &schedule()), Some(112_500));
    }

    #[test]
    fn test_regular_overtime_just_past_60_hours() {
        // 100000 × (76.5 + 1.5 × 0.0001) = 7650015
        assert_eq!(regular_overtime_allowance(100_000, dec("60"), &schedule()), Some(7_650_000));
        assert_eq!(
            regular_overtime_allowance(100_000, dec("60.0001"), &schedule()),
            Some(7_650_015)
        );
        assert_eq!(regular_overtime_allowance(2_000, dec("60.0001"), &schedule()), Some(153_000));
    }

    #[test]
    fn test_regular_overtime_third_tier() {
        // 112500 + 40500 + 2000 × 1.5 × 10
        assert_eq!(regular_overtime_allowance(2_000, dec("70"), &schedule()), Some(183_000));
    }

    #[test]
    fn test_regular_overtime_truncates_once_after_summing_tiers() {
        // 1562 × (56.25 + 1.35 × 0.5) = 1562 × 56.925 = 88916.85
        assert_eq!(regular_overtime_allowance(1_562, dec("45.5"), &schedule()), Some(88_916));
    }

    #[test]
    fn test_regular_overtime_fractional_hours() {
        // 1562 × 1.25 × 12.5 = 24406.25
        assert_eq!(regular_overtime_allowance(1_562, dec("12.5"), &schedule()), Some(24_406));
    }

    #[test]
    fn test_regular_overtime_zero_and_negative_hours() {
        assert_eq!(regular_overtime_allowance(2_000, Decimal::ZERO, &schedule()), Some(0));
        assert_eq!(regular_overtime_allowance(2_000, dec("-3"), &schedule()), Some(0));
    }

    // ==========================================================================
    // Flat allowances
    // ==========================================================================

    #[test]
    fn test_late_night_allowance() {
        // 2000 × 0.25 × 10
        assert_eq!(late_night_allowance(2_000, dec("10"), &schedule()), Some(5_000));
        assert_eq!(late_night_allowance(1_562, dec("3"), &schedule()), Some(1_171));
    }

    #[test]
    fn test_holiday_allowance() {
        // 2000 × 1.35 × 8
        assert_eq!(holiday_allowance(2_000, dec("8"), &schedule()), Some(21_600));
    }

    #[test]
    fn test_holiday_late_night_allowance() {
        // 2000 × 1.6 × 4
        assert_eq!(holiday_late_night_allowance(2_000, dec("4"), &schedule()), Some(12_800));
    }

    #[test]
    fn test_flat_allowances_guard_non_positive_hours() {
        assert_eq!(late_night_allowance(2_000, dec("-1"), &schedule()), Some(0));
        assert_eq!(holiday_allowance(2_000, Decimal::ZERO, &schedule()), Some(0));
        assert_eq!(holiday_late_night_allowance(2_000, dec("-0.5"), &schedule()), Some(0));
    }

    #[test]
    fn test_calculate_allowances_totals_components() {
        let attendance = AttendanceRecord {
            employee_id: "E001".to_string(),
            regular_overtime_hours: dec("50"),
            late_night_overtime_hours: dec("10"),
            holiday_work_hours: dec("8"),
            holiday_late_night_hours: dec("4"),
            absence_days: 0,
            tardiness_count: 0,
        };

        let allowances = calculate_allowances(2_000, &attendance, &schedule()).unwrap();
        assert_eq!(allowances.regular_overtime, 126_000);
        assert_eq!(allowances.late_night, 5_000);
        assert_eq!(allowances.holiday_work, 21_600);
        assert_eq!(allowances.holiday_late_night, 12_800);
        assert_eq!(allowances.total, 165_400);
    }

    #[test]
    fn test_calculate_allowances_for_zero_attendance() {
        let allowances = calculate_allowances(2_000, &AttendanceRecord::zero("E001"), &schedule());
        assert_eq!(allowances, Some(Allowances::default()));
    }

    #[test]
    fn test_overflowing_hours_yield_none() {
        let hours = dec("100000000000000000000000000");
        assert_eq!(regular_overtime_allowance(2_000, hours, &schedule()), None);
        assert_eq!(late_night_allowance(2_000, hours, &schedule()), None);
        assert_eq!(holiday_allowance(2_000, hours, &schedule()), None);

        let attendance = AttendanceRecord {
            holiday_late_night_hours: hours,
            ..AttendanceRecord::zero("E001")
        };
        assert_eq!(calculate_allowances(2_000, &attendance, &schedule()), None);
    }

    #[test]
    fn test_allowance_total_overflow_yields_none() {
        // each component fits in i64, their sum does not
        let attendance = AttendanceRecord {
            // 7.5e18 and 8.1e18
            late_night_overtime_hours: dec("3000"),
            holiday_work_hours: dec("600"),
            ..AttendanceRecord::zero("E001")
        };
        assert_eq!(
            calculate_allowances(10_000_000_000_000_000, &attendance, &schedule()),
            None
        );
    }
}
