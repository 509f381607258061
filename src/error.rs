//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading inputs, computing
//! payroll, and writing results.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::GradeNotFound {
///     employee_id: "E001".to_string(),
///     grade: "G9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Grade 'G9' for employee 'E001' not found in grade table");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate schedule was structurally invalid.
    #[error("Invalid rate schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// An employee references a grade code that is not in the grade table.
    #[error("Grade '{grade}' for employee '{employee_id}' not found in grade table")]
    GradeNotFound {
        /// The employee whose computation failed.
        employee_id: String,
        /// The grade code that was not found.
        grade: String,
    },

    /// An input document was not found.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input document could not be parsed.
    #[error("Failed to parse input file '{path}': {message}")]
    InputParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input record failed validation.
    #[error("Invalid record for employee '{employee_id}', field '{field}': {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An output document could not be written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWriteError {
        /// The destination path.
        path: String,
        /// A description of the write failure.
        message: String,
    },

    /// An amount in one employee's computation left the representable range.
    #[error("Calculation failed for employee '{employee_id}': {message}")]
    CalculationError {
        /// The employee whose computation failed.
        employee_id: String,
        /// Which step of the computation failed.
        message: String,
    },
}

impl EngineError {
    /// Returns the employee this error concerns, if any.
    pub fn employee_id(&self) -> Option<&str> {
        match self {
            EngineError::GradeNotFound { employee_id, .. }
            | EngineError::InvalidRecord { employee_id, .. }
            | EngineError::CalculationError { employee_id, .. } => Some(employee_id),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
