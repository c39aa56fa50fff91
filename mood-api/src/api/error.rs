//! Mapping of core errors onto HTTP responses
//!
//! - validation failures: 400 `{"error": "<message>"}`
//! - scoring failures: 500 `{"detail": "<message>"}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mood_common::{ScoringError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the analysis handler
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(e) => json!({ "error": e.to_string() }),
            ApiError::Scoring(e) => json!({ "detail": e.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
