use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use super::types::{ErrorResponse, MessageResponse};
use super::validator::validate_submission;
use crate::error::SubmitError;
use crate::leaderboard::policy::merge;
use crate::leaderboard::types::ScoreEntry;
use crate::store::StoreClient;

/// `POST /submit-score`.
///
/// Linear pipeline, terminal on the first failure:
/// decode → validate → fetch board → merge → persist → respond.
pub async fn handle_submit_score(
    Extension(store): Extension<Arc<StoreClient>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    match submit_score(&store, payload).await {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(err) => {
            match &err {
                SubmitError::InvalidSubmission(reason) => {
                    tracing::warn!("Rejected submission: {}", reason);
                }
                // Debug output carries the upstream status and body; they
                // stay in the log and out of the response.
                SubmitError::StoreRead(source) => {
                    tracing::error!("Leaderboard read failed: {:?}", source);
                }
                SubmitError::StoreWrite(source) => {
                    tracing::error!("Leaderboard write failed: {:?}", source);
                }
                other => {
                    tracing::error!("Score submission failed: {}", other);
                }
            }

            (err.status(), Json(ErrorResponse {
                error: err.public_message(),
            }))
                .into_response()
        }
    }
}

/// Fallback for every non-POST method on the submit route. Terminal; the
/// store is never contacted.
pub async fn handle_method_not_allowed() -> (StatusCode, Json<MessageResponse>) {
    let err = SubmitError::MethodNotAllowed;
    (
        err.status(),
        Json(MessageResponse {
            message: err.public_message(),
        }),
    )
}

async fn submit_score(
    store: &StoreClient,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<MessageResponse, SubmitError> {
    let Json(payload) =
        payload.map_err(|rejection| SubmitError::Unexpected(rejection.body_text()))?;

    let submission = validate_submission(&payload)?;

    // Timestamp is assigned here; a client-supplied date is ignored.
    let entry = ScoreEntry::new(submission.name, submission.shrimps);

    let current = store
        .fetch_leaderboard()
        .await
        .map_err(SubmitError::StoreRead)?;

    let updated = merge(current, entry);

    store
        .persist_leaderboard(&updated)
        .await
        .map_err(SubmitError::StoreWrite)?;

    Ok(MessageResponse {
        message: "Score submitted successfully".to_string(),
    })
}
