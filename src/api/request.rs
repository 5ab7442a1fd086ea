//! Request types for the salary breakup API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{Allocation, SalaryInput};

/// Request body for the `/calculate` endpoint.
///
/// The salary inputs sit at the top level of the body. A client that keeps
/// its own session may send back the allocation from its previous response
/// as `previous_allocation`, so that a request with a missing percentage
/// holds those values instead of zeros.
///
/// ```text
/// {
///   "gross_amount": 50000,
///   "basic_percentage": 50,
///   "hra_percentage": 40,
///   "other_percentage": null,
///   "previous_allocation": { "basic": "25000.00", "hra": "10000.00", "other_allowance": "5000.00" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The salary inputs.
    #[serde(flatten)]
    pub input: SalaryInput,
    /// The allocation shown before this change, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_allocation: Option<Allocation>,
}
