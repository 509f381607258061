//! File input and output for batch runs.
//!
//! Loads JSON input documents (with validation) and writes JSON output
//! documents atomically.

mod input;
mod output;

pub use input::{
    MAX_ABSENCE_DAYS, MAX_AMOUNT, MAX_MONTHLY_HOURS, MAX_TARDINESS_COUNT, load_input, load_output,
    validate_input,
};
pub use output::write_json;

pub(crate) use output::write_atomically;
