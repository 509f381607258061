//! Monthly payroll engine.
//!
//! This crate computes itemized monthly pay for a batch of employees from
//! attendance and grade data: tiered overtime and holiday allowances,
//! attendance-based deductions, social insurance and progressive income tax.
//! Around the pure calculation core it provides JSON input and output,
//! spreadsheet reports, result verification and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod report;
pub mod verify;
