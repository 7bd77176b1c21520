use serde_json::Value;

use super::types::ValidSubmission;
use crate::error::SubmitError;

/// Longest accepted player name, in characters.
pub const MAX_NAME_CHARS: usize = 20;
/// Smallest accepted score. Fractional values above it are accepted.
pub const MIN_SHRIMPS: f64 = 1.0;

/// Strict decode of an untyped submission payload.
///
/// Either every rule passes and a typed `ValidSubmission` comes out, or the
/// request fails here before any store access. Rules:
/// - `name`: present, a string, 1..=20 characters.
/// - `shrimps`: present, a number, >= 1 (integers not required).
pub fn validate_submission(payload: &Value) -> Result<ValidSubmission, SubmitError> {
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| SubmitError::InvalidSubmission("name must be a string".to_string()))?;

    let name_len = name.chars().count();
    if name_len < 1 || name_len > MAX_NAME_CHARS {
        return Err(SubmitError::InvalidSubmission(format!(
            "name must be 1-{} characters",
            MAX_NAME_CHARS
        )));
    }

    let shrimps = payload
        .get("shrimps")
        .and_then(Value::as_f64)
        .ok_or_else(|| SubmitError::InvalidSubmission("shrimps must be a number".to_string()))?;

    if shrimps < MIN_SHRIMPS {
        return Err(SubmitError::InvalidSubmission(
            "shrimps must be at least 1".to_string(),
        ));
    }

    Ok(ValidSubmission {
        name: name.to_string(),
        shrimps,
    })
}
