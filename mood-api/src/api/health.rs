//! Health check endpoint
//!
//! Reports liveness together with the classification policy in effect, so
//! a client can tell which negative label and thresholds it is talking to.

use axum::{extract::State, routing::get, Json, Router};
use mood_common::{Mood, MoodPolicy};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub policy: PolicySummary,
}

/// Active thresholds and labels
#[derive(Debug, Serialize)]
pub struct PolicySummary {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
    pub negative_mood: Mood,
    pub scoring_timeout_ms: Option<u64>,
}

impl PolicySummary {
    fn new(policy: &MoodPolicy, state: &AppState) -> Self {
        Self {
            positive_threshold: policy.positive_threshold,
            negative_threshold: policy.negative_threshold,
            negative_mood: policy.negative_mood.into(),
            scoring_timeout_ms: state.scoring_timeout.map(|t| t.as_millis() as u64),
        }
    }
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        module: "mood-api",
        version: env!("CARGO_PKG_VERSION"),
        policy: PolicySummary::new(state.classifier.policy(), &state),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
