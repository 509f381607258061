//! Spreadsheet rendering of a payroll run.
//!
//! Produces a six-sheet `.xlsx` workbook from a [`PayrollOutput`]. The
//! workbook is presentation only: formula cells restate figures already in
//! the output and never alter them.
//!
//! [`PayrollOutput`]: crate::models::PayrollOutput

mod workbook;

pub use workbook::{build_workbook, write_workbook, SHEET_NAMES};
