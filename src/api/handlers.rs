//! HTTP request handlers for the salary breakup API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::SalaryCalculator;
use crate::models::Allocation;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/config", get(config_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts salary inputs and returns the full salary breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let previous = request.previous_allocation.unwrap_or(Allocation::ZERO);
    let mut calculator = SalaryCalculator::with_allocation(state.shared_config(), previous);
    let breakdown = match calculator.recompute(&request.input) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        calculation_id = %breakdown.calculation_id,
        status = breakdown.allocation_status.as_str(),
        gross_monthly = %breakdown.totals.gross_monthly,
        net_payment = %breakdown.totals.net_payment,
        duration_us = breakdown.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(breakdown),
    )
        .into_response()
}

/// Handler for GET /config endpoint.
///
/// Returns the payroll configuration requests are calculated with.
async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().clone())
}
