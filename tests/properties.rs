//! Property tests for the calculation core.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    calculate_employee_payroll, income_tax, regular_overtime_allowance, truncate,
};
use payroll_engine::config::RateSchedule;
use payroll_engine::io::{
    MAX_ABSENCE_DAYS, MAX_AMOUNT, MAX_MONTHLY_HOURS, MAX_TARDINESS_COUNT, validate_input,
};
use payroll_engine::models::{AttendanceRecord, Employee, GradeInfo, GradeTable, PayrollInput};

fn schedule() -> RateSchedule {
    RateSchedule::default()
}

fn tenths(value: u32) -> Decimal {
    Decimal::new(i64::from(value), 1)
}

fn grade_table(insurance_thousandths: u32, base_deduction: i64) -> GradeTable {
    let mut table = GradeTable::new();
    table.insert(
        "G1".to_string(),
        GradeInfo {
            insurance_rate: Decimal::new(i64::from(insurance_thousandths), 3),
            base_deduction,
        },
    );
    table
}

fn employee(base_salary: i64, commute_allowance: i64, dependents: u32) -> Employee {
    Employee {
        id: "E001".to_string(),
        name: "Test Employee".to_string(),
        department: "Ops".to_string(),
        grade: "G1".to_string(),
        base_salary,
        commute_allowance,
        dependents,
    }
}

prop_compose! {
    fn arb_attendance()(
        regular in 0u32..=1_000,
        late_night in 0u32..=600,
        holiday in 0u32..=400,
        holiday_late_night in 0u32..=200,
        absence_days in 0u32..=25,
        tardiness_count in 0u32..=30,
    ) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "E001".to_string(),
            regular_overtime_hours: tenths(regular),
            late_night_overtime_hours: tenths(late_night),
            holiday_work_hours: tenths(holiday),
            holiday_late_night_hours: tenths(holiday_late_night),
            absence_days,
            tardiness_count,
        }
    }
}

proptest! {
    #[test]
    fn first_tier_is_flat_multiplier(rate in 1i64..=20_000, hours in 0u32..=450) {
        let hours = tenths(hours);
        prop_assert_eq!(
            regular_overtime_allowance(rate, hours, &schedule()),
            truncate(Decimal::from(rate) * Decimal::new(125, 2) * hours)
        );
    }

    #[test]
    fn overtime_allowance_is_monotonic(rate in 1i64..=20_000, a in 0u32..=1_200, b in 0u32..=1_200) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            regular_overtime_allowance(rate, tenths(low), &schedule()).unwrap()
                <= regular_overtime_allowance(rate, tenths(high), &schedule()).unwrap()
        );
    }

    #[test]
    fn income_tax_steps_by_at_most_one_unit(taxable in 0i64..=1_000_000) {
        let here = income_tax(taxable, 0, 0, 0, &schedule()).unwrap();
        let next = income_tax(taxable + 1, 0, 0, 0, &schedule()).unwrap();
        prop_assert!(next >= here);
        prop_assert!(next - here <= 1);
    }

    #[test]
    fn results_satisfy_pay_invariants(
        base_salary in 0i64..=2_000_000,
        commute in 0i64..=50_000,
        dependents in 0u32..=5,
        insurance in 0u32..=300,
        base_deduction in 0i64..=100_000,
        attendance in arb_attendance(),
    ) {
        let result = calculate_employee_payroll(
            &employee(base_salary, commute, dependents),
            &attendance,
            &grade_table(insurance, base_deduction),
            &schedule(),
        ).unwrap();

        prop_assert_eq!(
            result.base_salary + result.commute_allowance + result.allowances.total
                - result.deductions_from_pay.total,
            result.gross_pay
        );
        prop_assert_eq!(result.gross_pay - result.statutory_deductions.total, result.net_pay);
        prop_assert!(result.statutory_deductions.income_tax >= 0);
    }

    #[test]
    fn computation_is_idempotent(
        base_salary in 0i64..=2_000_000,
        commute in 0i64..=50_000,
        attendance in arb_attendance(),
    ) {
        let employee = employee(base_salary, commute, 1);
        let grades = grade_table(100, 50_000);

        let first = calculate_employee_payroll(&employee, &attendance, &grades, &schedule()).unwrap();
        let second = calculate_employee_payroll(&employee, &attendance, &grades, &schedule()).unwrap();

        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_attendance_pays_base_plus_commute(
        base_salary in 0i64..=2_000_000,
        commute in 0i64..=50_000,
    ) {
        let result = calculate_employee_payroll(
            &employee(base_salary, commute, 0),
            &AttendanceRecord::zero("E001"),
            &grade_table(100, 50_000),
            &schedule(),
        ).unwrap();

        prop_assert_eq!(result.allowances.total, 0);
        prop_assert_eq!(result.deductions_from_pay.total, 0);
        prop_assert_eq!(result.gross_pay, base_salary + commute);
    }

    #[test]
    fn validated_input_never_overflows(
        base_salary in 0i64..=MAX_AMOUNT,
        commute in 0i64..=MAX_AMOUNT,
        base_deduction in 0i64..=MAX_AMOUNT,
        insurance in 0u32..=1_000,
        dependents in 0u32..=u32::MAX,
        hours_fraction in 0u32..=100,
        absence_days in 0u32..=MAX_ABSENCE_DAYS,
        tardiness_count in 0u32..=MAX_TARDINESS_COUNT,
    ) {
        let hours = MAX_MONTHLY_HOURS * Decimal::new(i64::from(hours_fraction), 2);
        let attendance = AttendanceRecord {
            employee_id: "E001".to_string(),
            regular_overtime_hours: hours,
            late_night_overtime_hours: hours,
            holiday_work_hours: hours,
            holiday_late_night_hours: hours,
            absence_days,
            tardiness_count,
        };
        let input = PayrollInput {
            employees: vec![employee(base_salary, commute, dependents)],
            attendance: vec![attendance.clone()],
            grade_table: grade_table(insurance, base_deduction),
        };
        prop_assert!(validate_input(&input).is_ok());

        let result = calculate_employee_payroll(
            &input.employees[0],
            &attendance,
            &input.grade_table,
            &schedule(),
        );
        prop_assert!(result.is_ok(), "unexpected error: {:?}", result.as_ref().err());
        prop_assert!(result.unwrap().is_consistent());
    }
}
