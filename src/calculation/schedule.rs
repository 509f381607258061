//! Progressive schedule evaluation.
//!
//! A [`ProgressiveSchedule`] is evaluated in one of two ways:
//!
//! - **Graduated**: each band's rate applies only to the part of the quantity
//!   that falls inside the band (overtime tiers).
//! - **Quick deduction**: the band containing the quantity is found and
//!   `quantity × rate − offset` is applied to the whole quantity (income tax).
//!
//! [`PenaltyRule`] covers the remaining threshold rules, where a multiplier
//! is applied to the entire product once a count reaches the threshold.

use rust_decimal::Decimal;

use crate::config::{PenaltyRule, ProgressiveSchedule};

impl ProgressiveSchedule {
    /// Sums `portion × rate` over every band the quantity reaches.
    ///
    /// Returns `None` on arithmetic overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::RateSchedule;
    /// use rust_decimal::Decimal;
    ///
    /// let tiers = RateSchedule::default().overtime_tiers;
    /// // 45h at 1.25 + 5h at 1.35
    /// assert_eq!(tiers.graduated(Decimal::from(50)), Some(Decimal::new(630, 1)));
    /// ```
    pub fn graduated(&self, quantity: Decimal) -> Option<Decimal> {
        let mut lower = Decimal::ZERO;
        let mut weighted = Decimal::ZERO;

        for band in self.bands() {
            if quantity <= lower {
                break;
            }
            let upper = match band.upper_bound {
                Some(bound) => bound.min(quantity),
                None => quantity,
            };
            let portion = upper.checked_sub(lower)?.checked_mul(band.rate)?;
            weighted = weighted.checked_add(portion)?;

            match band.upper_bound {
                Some(bound) => lower = bound,
                None => break,
            }
        }

        Some(weighted)
    }

    /// Applies the band containing the quantity to the whole quantity.
    ///
    /// Returns zero for an empty schedule and `None` on arithmetic overflow.
    pub fn quick_deduction(&self, quantity: Decimal) -> Option<Decimal> {
        match self
            .bands()
            .iter()
            .find(|band| band.upper_bound.is_none_or(|bound| quantity <= bound))
        {
            Some(band) => quantity.checked_mul(band.rate)?.checked_sub(band.offset),
            None => Some(Decimal::ZERO),
        }
    }
}

impl PenaltyRule {
    /// Returns `unit × count`, multiplied as a whole once `count` reaches the threshold.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn apply(&self, unit: Decimal, count: u32) -> Option<Decimal> {
        let base = unit.checked_mul(Decimal::from(count))?;
        if count >= self.applies_from {
            base.checked_mul(self.multiplier)
        } else {
            Some(base)
        }
    }
}
