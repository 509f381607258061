//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::process_payroll;
use crate::io::validate_input;
use crate::models::{PayrollInput, PayrollOutput};
use crate::verify::{VerificationReport, verify_results};

use super::request::VerifyRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/verify", post(verify_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Validates the input document and returns the batch output. Employees
/// with unknown grades or overflowing amounts are reported in `skipped`,
/// not as an error.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollInput>, JsonRejection>,
) -> Result<Json<PayrollOutput>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let Json(input) = payload.map_err(|rejection| rejection_error(correlation_id, rejection))?;

    validate_input(&input).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            employee_id = err.employee_id().unwrap_or("-"),
            error = %err,
            "Input validation failed"
        );
        ApiErrorResponse::from(err)
    })?;

    let start_time = Instant::now();
    let output = process_payroll(&input, state.schedule());
    info!(
        correlation_id = %correlation_id,
        employees = output.summary.employee_count,
        skipped = output.skipped.len(),
        total_net_pay = output.summary.total_net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed"
    );

    Ok(Json(output))
}

/// Handler for POST /verify.
async fn verify_handler(
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerificationReport>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing verification request");

    let Json(request) = payload.map_err(|rejection| rejection_error(correlation_id, rejection))?;

    let report = verify_results(&request.calculated, &request.expected);
    info!(
        correlation_id = %correlation_id,
        status = %report.status,
        errors = report.total_errors,
        "Verification completed"
    );

    Ok(Json(report))
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
