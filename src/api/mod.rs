//! HTTP API for the payroll engine.
//!
//! Exposes batch calculation and verification over JSON, sharing one
//! loaded rate schedule across requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::VerifyRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
