//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every threshold, multiplier
//! and bracket used by the calculators lives here rather than in formula code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollMetadata {
    /// Short identifier of the configuration (e.g., "standard").
    pub code: String,
    /// The human-readable name of the configuration.
    pub name: String,
    /// The version of the rate schedule.
    pub version: String,
    /// ISO currency code all monetary amounts are expressed in.
    pub currency: String,
    /// The date from which this schedule applies.
    pub effective_date: NaiveDate,
}

impl Default for PayrollMetadata {
    fn default() -> Self {
        Self {
            code: "standard".to_string(),
            name: "Standard Monthly Payroll".to_string(),
            version: "built-in".to_string(),
            currency: "JPY".to_string(),
            effective_date: NaiveDate::MIN,
        }
    }
}

/// One band of a progressive schedule.
///
/// A band covers quantities up to `upper_bound` (inclusive); `None` marks the
/// open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Inclusive upper bound of this band, or `None` for the top band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Multiplier or rate for quantities inside this band.
    pub rate: Decimal,
    /// Fixed amount subtracted in quick-deduction evaluation.
    #[serde(default)]
    pub offset: Decimal,
}

impl Band {
    /// Creates a bounded band.
    pub fn bounded(upper_bound: Decimal, rate: Decimal, offset: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
            offset,
        }
    }

    /// Creates the open-ended top band.
    pub fn open(rate: Decimal, offset: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
            offset,
        }
    }
}

/// An ordered list of bands evaluated as a single schedule.
///
/// The same structure backs graduated overtime tiers and quick-deduction
/// income-tax brackets; see `calculation::schedule` for the two evaluators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressiveSchedule {
    bands: Vec<Band>,
}

impl ProgressiveSchedule {
    /// Creates a schedule from bands ordered by ascending upper bound.
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Returns the bands in evaluation order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Checks that bounds ascend strictly and only the last band is open.
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        let Some((last, bounded)) = self.bands.split_last() else {
            return Err(EngineError::InvalidSchedule {
                message: format!("{name} has no bands"),
            });
        };

        if last.upper_bound.is_some() {
            return Err(EngineError::InvalidSchedule {
                message: format!("{name} must end with an open-ended band"),
            });
        }

        let mut previous = Decimal::ZERO;
        for band in bounded {
            match band.upper_bound {
                Some(upper) if upper > previous => previous = upper,
                Some(upper) => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "{name} upper bounds must ascend strictly (found {} after {})",
                            upper, previous
                        ),
                    });
                }
                None => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("{name} has an open-ended band before the last band"),
                    });
                }
            }
        }

        Ok(())
    }
}

/// A whole-product penalty multiplier that applies once a count reaches a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRule {
    /// The first count at which the multiplier applies.
    pub applies_from: u32,
    /// The multiplier applied to the entire `unit × count` product.
    pub multiplier: Decimal,
}

/// The complete rate schedule consumed by the calculators.
///
/// `RateSchedule::default()` carries the standard monthly schedule: 160 hours,
/// 20 days, overtime tiers at 45/60 hours, and a three-bracket income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Standard working hours per month, the hourly rate divisor.
    pub standard_monthly_hours: Decimal,
    /// Standard working days per month, the daily rate divisor.
    pub standard_monthly_days: Decimal,
    /// Graduated overtime multipliers by cumulative hours.
    pub overtime_tiers: ProgressiveSchedule,
    /// Premium added for late-night hours.
    pub late_night_premium: Decimal,
    /// Multiplier for holiday work.
    pub holiday_multiplier: Decimal,
    /// Penalty for absence days.
    pub absence_penalty: PenaltyRule,
    /// Penalty for tardiness occurrences.
    pub tardiness_penalty: PenaltyRule,
    /// Deduction per dependent before income tax.
    pub dependent_deduction: i64,
    /// Quick-deduction income tax brackets.
    pub income_tax_brackets: ProgressiveSchedule,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            standard_monthly_hours: Decimal::from(160),
            standard_monthly_days: Decimal::from(20),
            overtime_tiers: ProgressiveSchedule::new(vec![
                Band::bounded(Decimal::from(45), Decimal::new(125, 2), Decimal::ZERO),
                Band::bounded(Decimal::from(60), Decimal::new(135, 2), Decimal::ZERO),
                Band::open(Decimal::new(150, 2), Decimal::ZERO),
            ]),
            late_night_premium: Decimal::new(25, 2),
            holiday_multiplier: Decimal::new(135, 2),
            absence_penalty: PenaltyRule {
                applies_from: 4,
                multiplier: Decimal::new(8, 1),
            },
            tardiness_penalty: PenaltyRule {
                applies_from: 4,
                multiplier: Decimal::new(15, 1),
            },
            dependent_deduction: 38_000,
            income_tax_brackets: ProgressiveSchedule::new(vec![
                Band::bounded(Decimal::from(162_500), Decimal::new(5, 2), Decimal::ZERO),
                Band::bounded(
                    Decimal::from(275_000),
                    Decimal::new(10, 2),
                    Decimal::from(8_125),
                ),
                Band::open(Decimal::new(20, 2), Decimal::from(35_625)),
            ]),
        }
    }
}

impl RateSchedule {
    /// Validates the structural invariants of the schedule.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_monthly_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: "standard_monthly_hours must be positive".to_string(),
            });
        }
        if self.standard_monthly_days <= Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: "standard_monthly_days must be positive".to_string(),
            });
        }
        if self.dependent_deduction < 0 {
            return Err(EngineError::InvalidSchedule {
                message: "dependent_deduction must not be negative".to_string(),
            });
        }
        self.overtime_tiers.validate("overtime_tiers")?;
        self.income_tax_brackets.validate("income_tax_brackets")?;
        Ok(())
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    schedule: RateSchedule,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: PayrollMetadata, schedule: RateSchedule) -> Self {
        Self { metadata, schedule }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(RateSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_default_schedule_constants() {
        let schedule = RateSchedule::default();
        assert_eq!(schedule.standard_monthly_hours, Decimal::from(160));
        assert_eq!(schedule.standard_monthly_days, Decimal::from(20));
        assert_eq!(schedule.dependent_deduction, 38_000);
        assert_eq!(schedule.overtime_tiers.bands().len(), 3);
        assert_eq!(
            schedule.income_tax_brackets.bands()[2].offset,
            Decimal::from(35_625)
        );
    }

    #[test]
    fn test_schedule_without_open_band_is_rejected() {
        let schedule =
            ProgressiveSchedule::new(vec![Band::bounded(Decimal::from(10), Decimal::ONE, Decimal::ZERO)]);
        let result = schedule.validate("tiers");
        assert!(matches!(result, Err(EngineError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_schedule_with_descending_bounds_is_rejected() {
        let schedule = ProgressiveSchedule::new(vec![
            Band::bounded(Decimal::from(60), Decimal::ONE, Decimal::ZERO),
            Band::bounded(Decimal::from(45), Decimal::ONE, Decimal::ZERO),
            Band::open(Decimal::ONE, Decimal::ZERO),
        ]);
        match schedule.validate("tiers") {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("ascend"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_schedule_is_rejected() {
        let schedule = ProgressiveSchedule::new(vec![]);
        assert!(schedule.validate("brackets").is_err());
    }

    #[test]
    fn test_zero_monthly_hours_is_rejected() {
        let schedule = RateSchedule {
            standard_monthly_hours: Decimal::ZERO,
            ..RateSchedule::default()
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_band_deserializes_without_bound_or_offset() {
        let band: Band = serde_yaml::from_str("rate: 1.5").unwrap();
        assert_eq!(band.upper_bound, None);
        assert_eq!(band.rate, Decimal::new(15, 1));
        assert_eq!(band.offset, Decimal::ZERO);
    }
}
