//! mood-api library - HTTP surface of the mood analysis service
//!
//! Wraps the framework-independent core in `mood-common` with an axum
//! router. Scoring runs on the blocking thread pool, optionally bounded by
//! a timeout.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use mood_common::{MoodClassifier, MoodPolicy, MoodResult, PolarityScorer, ScoringError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod server;

/// Application state shared across HTTP handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Policy plus scoring engine
    pub classifier: MoodClassifier,
    /// Upper bound on one scoring call; `None` waits indefinitely
    pub scoring_timeout: Option<Duration>,
}

impl AppState {
    /// Create new application state
    pub fn new(policy: MoodPolicy, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            classifier: MoodClassifier::new(policy, scorer),
            scoring_timeout: None,
        }
    }

    pub fn with_scoring_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.scoring_timeout = timeout;
        self
    }

    /// Classify `text` off the async runtime
    ///
    /// A panicking scorer and an expired timeout both surface as
    /// [`ScoringError`]s. On timeout the blocking call keeps running and
    /// its result is discarded.
    pub async fn classify(&self, text: String) -> Result<MoodResult, ScoringError> {
        let classifier = self.classifier.clone();
        let task = tokio::task::spawn_blocking(move || classifier.classify(&text));

        let joined = match self.scoring_timeout {
            Some(limit) => tokio::time::timeout(limit, task)
                .await
                .map_err(|_| ScoringError::Timeout(limit.as_millis() as u64))?,
            None => task.await,
        };

        joined.map_err(|e| ScoringError::Aborted(e.to_string()))?
    }
}

/// Build application router
///
/// The analysis handler is mounted at both `/analyze` and `/mood`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/analyze", post(api::analyze))
        .route("/mood", post(api::analyze))
        .merge(api::health_routes())
        .merge(api::buildinfo_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
