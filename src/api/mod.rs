//! HTTP API module for the salary breakup engine.
//!
//! This module provides the REST API endpoints for calculating a salary
//! breakdown and inspecting the active payroll configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
