//! Grade table models.
//!
//! Grades carry the per-grade statutory parameters. A single table is shared
//! read-only by every employee computation in a run.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory parameters for one grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInfo {
    /// Social insurance rate as a fraction between 0 and 1.
    #[serde(with = "rust_decimal::serde::float")]
    pub insurance_rate: Decimal,
    /// Base deduction subtracted before income tax.
    pub base_deduction: i64,
}

/// Mapping of grade code to [`GradeInfo`].
pub type GradeTable = BTreeMap<String, GradeInfo>;
