//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wordchain_core::clock::Clock;
use wordchain_core::rng::DeterministicRng;
use wordchain_game::application::registry::SessionRegistry;
use wordchain_game::application::resolver::TurnResolver;
use wordchain_game::domain::corpus::WordCorpus;
use wordchain_test_support::{FixedClock, SequenceRng};

use wordchain_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over `words` with a scripted RNG. Uses the same
/// route structure as `main.rs`.
pub fn build_test_app_with(words: &[&str], rng: SequenceRng) -> Router {
    let corpus = Arc::new(WordCorpus::new(words).unwrap());
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let state = AppState::new(TurnResolver::new(
        corpus,
        SessionRegistry::with_shards(4),
        fixed_clock(),
        rng,
    ));
    wordchain_api::app(state)
}

/// Build the app over the kitob/bola/ata corpus: the first draw opens with
/// "kitob", the second answers "bola" with "ata".
pub fn build_test_app() -> Router {
    build_test_app_with(&["kitob", "bola", "ata"], SequenceRng::new(vec![2, 0]))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
