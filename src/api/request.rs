//! Request types for the payroll API.
//!
//! `/calculate` accepts a [`PayrollInput`](crate::models::PayrollInput)
//! document as-is; only verification needs a wrapper.

use serde::{Deserialize, Serialize};

use crate::models::PayrollOutput;

/// Request body for the `/verify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The freshly calculated output.
    pub calculated: PayrollOutput,
    /// The reference output to compare against.
    pub expected: PayrollOutput,
}
