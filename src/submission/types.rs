use serde::{Deserialize, Serialize};

/// Confirmation body for successful submissions and for method rejections.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body for validation and store failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A submission that passed shape validation.
///
/// The only form in which client input reaches the rest of the system.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub name: String,
    pub shrimps: f64,
}
