//! Statutory deductions: social insurance and progressive income tax.
//!
//! Both are computed from gross pay after allowances and pay deductions.
//! Amounts that overflow `i64` come back as `None`.

use rust_decimal::Decimal;

use crate::config::RateSchedule;
use crate::models::{GradeInfo, StatutoryDeductions};

use super::truncate;

/// Calculates the social insurance premium.
///
/// The commute allowance is excluded from the insurable base.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::social_insurance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(social_insurance(456_000, 10_000, Decimal::new(1, 1)), Some(44_600));
/// ```
pub fn social_insurance(
    gross_pay: i64,
    commute_allowance: i64,
    insurance_rate: Decimal,
) -> Option<i64> {
    let insurable = gross_pay.checked_sub(commute_allowance)?;
    Decimal::from(insurable)
        .checked_mul(insurance_rate)
        .and_then(truncate)
}

/// Returns the income subject to tax, which may be zero or negative.
pub fn taxable_income(
    gross_pay: i64,
    social_insurance: i64,
    base_deduction: i64,
    dependents: u32,
    schedule: &RateSchedule,
) -> Option<i64> {
    let dependent_total = schedule
        .dependent_deduction
        .checked_mul(i64::from(dependents))?;
    gross_pay
        .checked_sub(social_insurance)?
        .checked_sub(base_deduction)?
        .checked_sub(dependent_total)
}

/// Calculates income tax with the quick-deduction bracket schedule.
///
/// Returns zero when taxable income is zero or negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::income_tax;
/// use payroll_engine::config::RateSchedule;
///
/// // taxable = 456000 - 44600 - 50000 - 38000 = 323400 → 20% bracket
/// assert_eq!(income_tax(456_000, 44_600, 50_000, 1, &RateSchedule::default()), Some(29_055));
/// ```
pub fn income_tax(
    gross_pay: i64,
    social_insurance: i64,
    base_deduction: i64,
    dependents: u32,
    schedule: &RateSchedule,
) -> Option<i64> {
    let taxable = taxable_income(gross_pay, social_insurance, base_deduction, dependents, schedule)?;
    if taxable <= 0 {
        return Some(0);
    }
    schedule
        .income_tax_brackets
        .quick_deduction(Decimal::from(taxable))
        .and_then(truncate)
}

/// Calculates both statutory deductions for one employee.
pub fn calculate_statutory(
    gross_pay: i64,
    commute_allowance: i64,
    dependents: u32,
    grade: &GradeInfo,
    schedule: &RateSchedule,
) -> Option<StatutoryDeductions> {
    let insurance = social_insurance(gross_pay, commute_allowance, grade.insurance_rate)?;
    let tax = income_tax(
        gross_pay,
        insurance,
        grade.base_deduction,
        dependents,
        schedule,
    )?;
    StatutoryDeductions::new(insurance, tax)
}
