//! Mood analysis endpoint
//!
//! POST /analyze, POST /mood
//!
//! The body is read as raw bytes and decoded by hand: an absent,
//! malformed, or non-object body is handed to the validator as
//! `Value::Null` so every bad payload gets the same 400 response.

use axum::{body::Bytes, extract::State, Json};
use mood_common::{validate, MoodResult};
use serde_json::Value;
use tracing::{debug, warn};

use super::ApiError;
use crate::AppState;

/// POST /analyze
///
/// Request: `{"text": "..."}`
/// Response: `{"mood": "happy", "score": 0.8}`
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MoodResult>, ApiError> {
    let payload = decode_payload(&body);

    let text = validate(&payload).map_err(|e| {
        debug!("Rejected analysis request: {}", e);
        e
    })?;

    let result = state.classify(text).await.map_err(|e| {
        warn!("Scoring failed: {}", e);
        e
    })?;

    debug!(mood = %result.mood, score = result.score, "Analysis complete");
    Ok(Json(result))
}

fn decode_payload(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(body).unwrap_or_else(|e| {
        debug!("Request body is not valid JSON: {}", e);
        Value::Null
    })
}
