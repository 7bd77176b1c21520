//! Request Error Taxonomy
//!
//! Every failure a submission can hit maps to exactly one variant here, and
//! every variant is terminal for its request: no retries, no compensation.
//! Upstream store response bodies are logged server-side for diagnostics but
//! never echoed back to the caller.

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Terminal outcome of a failed score submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The route only accepts POST.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// The payload failed shape validation. The reason is safe to echo.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),
    /// The document store rejected or failed the read.
    #[error("leaderboard read failed")]
    StoreRead(#[source] StoreError),
    /// The document store rejected or failed the write.
    #[error("leaderboard write failed")]
    StoreWrite(#[source] StoreError),
    /// Catch-all for anything not anticipated, e.g. a malformed JSON body.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmitError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmitError::InvalidSubmission(_) => StatusCode::BAD_REQUEST,
            SubmitError::StoreRead(_) | SubmitError::StoreWrite(_) | SubmitError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the caller. Validation reasons pass through;
    /// everything else collapses to a generic message so store internals
    /// stay out of responses.
    pub fn public_message(&self) -> String {
        match self {
            SubmitError::MethodNotAllowed => "Method Not Allowed".to_string(),
            SubmitError::InvalidSubmission(reason) => reason.clone(),
            SubmitError::StoreRead(_) | SubmitError::StoreWrite(_) => {
                "Failed to update leaderboard".to_string()
            }
            SubmitError::Unexpected(_) => "Unexpected error".to_string(),
        }
    }
}
