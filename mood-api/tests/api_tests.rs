//! Integration tests for mood-api endpoints
//!
//! Tests cover:
//! - Successful classification on /analyze and /mood
//! - Missing, empty and malformed payloads (400)
//! - Scorer failure, panic and timeout (500)
//! - Negative label policy
//! - Health, build info and CORS headers

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use mood_api::{build_router, server::cors_layer, AppState};
use mood_common::config::CorsConfig;
use mood_common::{LexiconScorer, MoodPolicy, NegativeMood, PolarityScorer, ScoringError};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

type Score = Result<f64, ScoringError>;

/// Test helper: Create app around the given scorer and policy
fn setup_app_with(policy: MoodPolicy, scorer: Arc<dyn PolarityScorer>) -> axum::Router {
    let state = AppState::new(policy, scorer);
    build_router(state, cors_layer(&CorsConfig::default()).unwrap())
}

/// Test helper: Create app whose scorer always returns `score`
fn setup_app(score: f64) -> axum::Router {
    let scorer = move |_: &str| -> Score { Ok(score) };
    setup_app_with(MoodPolicy::default(), Arc::new(scorer))
}

/// Test helper: POST a raw body
fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Classification
// =============================================================================

#[tokio::test]
async fn test_happy_text() {
    let app = setup_app(0.8);

    let response = app
        .oneshot(post("/analyze", r#"{"text": "I love this!"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mood"], "happy");
    assert_eq!(body["score"], 0.8);
}

#[tokio::test]
async fn test_negative_text_default_policy_is_sad() {
    let app = setup_app(-0.6);

    let response = app
        .oneshot(post("/analyze", r#"{"text": "This is terrible."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mood"], "sad");
    assert_eq!(body["score"], -0.6);
}

#[tokio::test]
async fn test_negative_text_angry_policy() {
    let scorer = |_: &str| -> Score { Ok(-0.6) };
    let app = setup_app_with(MoodPolicy::with_negative_mood(NegativeMood::Angry), Arc::new(scorer));

    let response = app
        .oneshot(post("/mood", r#"{"text": "This is terrible."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mood"], "angry");
}

#[tokio::test]
async fn test_boundary_score_is_neutral() {
    let app = setup_app(0.2);

    let response = app
        .oneshot(post("/analyze", r#"{"text": "meh"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mood"], "neutral");
    assert_eq!(body["score"], 0.2);
}

#[tokio::test]
async fn test_mood_route_matches_analyze_route() {
    let app = setup_app(-0.9);

    let a = app
        .clone()
        .oneshot(post("/analyze", r#"{"text": "x"}"#))
        .await
        .unwrap();
    let b = app.oneshot(post("/mood", r#"{"text": "x"}"#)).await.unwrap();

    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::OK);
    assert_eq!(extract_json(a.into_body()).await, extract_json(b.into_body()).await);
}

#[tokio::test]
async fn test_scorer_sees_raw_text() {
    let scorer = |text: &str| -> Score {
        if text == "  Keep  Me  " {
            Ok(0.5)
        } else {
            Err(ScoringError::engine(format!("unexpected text {:?}", text)))
        }
    };
    let app = setup_app_with(MoodPolicy::default(), Arc::new(scorer));

    let response = app
        .oneshot(post("/analyze", r#"{"text": "  Keep  Me  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bundled_lexicon_end_to_end() {
    let app = setup_app_with(MoodPolicy::default(), Arc::new(LexiconScorer::default()));

    let happy = app
        .clone()
        .oneshot(post("/analyze", r#"{"text": "I love this!"}"#))
        .await
        .unwrap();
    let body = extract_json(happy.into_body()).await;
    assert_eq!(body["mood"], "happy");

    let sad = app
        .oneshot(post("/analyze", r#"{"text": "This is terrible."}"#))
        .await
        .unwrap();
    let body = extract_json(sad.into_body()).await;
    assert_eq!(body["mood"], "sad");
}

// =============================================================================
// Validation failures
// =============================================================================

#[tokio::test]
async fn test_missing_text_is_bad_request() {
    let app = setup_app(0.8);

    let response = app.oneshot(post("/analyze", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_empty_text_is_bad_request() {
    let app = setup_app(0.8);

    let response = app
        .oneshot(post("/mood", r#"{"text": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_request() {
    for body in ["", "not json", "[1,2,3]", r#"{"text": 5}"#, "null"] {
        let app = setup_app(0.8);
        let response = app.oneshot(post("/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {:?}", body);
        let json = extract_json(response.into_body()).await;
        assert_eq!(json["error"], "No text provided");
    }
}

#[tokio::test]
async fn test_validation_happens_before_scoring() {
    let scorer = |_: &str| -> Score { panic!("scorer must not run for invalid payloads") };
    let app = setup_app_with(MoodPolicy::default(), Arc::new(scorer));

    let response = app.oneshot(post("/analyze", "{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Scoring failures
// =============================================================================

#[tokio::test]
async fn test_scorer_error_is_server_error() {
    let scorer = |_: &str| -> Score { Err(ScoringError::engine("unsupported encoding")) };
    let app = setup_app_with(MoodPolicy::default(), Arc::new(scorer));

    let response = app
        .oneshot(post("/analyze", r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("unsupported encoding"), "detail: {}", detail);
    assert!(body.get("mood").is_none());
}

#[tokio::test]
async fn test_scorer_panic_is_server_error() {
    let scorer = |_: &str| -> Score { panic!("engine crashed") };
    let app = setup_app_with(MoodPolicy::default(), Arc::new(scorer));

    let response = app
        .oneshot(post("/analyze", r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_out_of_range_score_is_server_error() {
    let app = setup_app(3.0);

    let response = app
        .oneshot(post("/analyze", r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_scoring_timeout_is_server_error() {
    let scorer = |_: &str| -> Score {
        std::thread::sleep(Duration::from_millis(500));
        Ok(0.9)
    };
    let state = AppState::new(MoodPolicy::default(), Arc::new(scorer))
        .with_scoring_timeout(Some(Duration::from_millis(20)));
    let app = build_router(state, cors_layer(&CorsConfig::default()).unwrap());

    let response = app
        .oneshot(post("/analyze", r#"{"text": "slow"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert!(body["detail"].as_str().unwrap().contains("timed out"));
}

// =============================================================================
// Health, build info, CORS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(0.0);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "mood-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_active_policy() {
    let scorer = |_: &str| -> Score { Ok(0.0) };
    let state = AppState::new(MoodPolicy::with_negative_mood(NegativeMood::Angry), Arc::new(scorer))
        .with_scoring_timeout(Some(Duration::from_millis(750)));
    let app = build_router(state, cors_layer(&CorsConfig::default()).unwrap());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["policy"]["negative_mood"], "angry");
    assert_eq!(body["policy"]["positive_threshold"], 0.2);
    assert_eq!(body["policy"]["negative_threshold"], -0.2);
    assert_eq!(body["policy"]["scoring_timeout_ms"], 750);
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app(0.0);

    let request = Request::builder()
        .uri("/buildinfo")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["git_hash"].is_string());
    assert!(body["build_profile"].is_string());
}

#[tokio::test]
async fn test_get_on_analyze_not_allowed() {
    let app = setup_app(0.0);

    let request = Request::builder()
        .uri("/analyze")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = setup_app(0.5);

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::ORIGIN, "http://somewhere.example")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "hi"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = setup_app(0.5);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/mood")
        .header(header::ORIGIN, "http://somewhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_cors_restricted_origin() {
    let cors = CorsConfig {
        allowed_origins: vec!["http://allowed.example".to_string()],
    };
    let scorer = |_: &str| -> Score { Ok(0.5) };
    let state = AppState::new(MoodPolicy::default(), Arc::new(scorer));
    let app = build_router(state, cors_layer(&cors).unwrap());

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::ORIGIN, "http://other.example")
        .body(Body::from(r#"{"text": "hi"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
