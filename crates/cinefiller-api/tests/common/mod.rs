//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cinefiller_core::repository::{CharacterRepository, ContentRepository};
use cinefiller_test_support::fixtures::{sample_characters, sample_scripts};
use cinefiller_test_support::{InMemoryCharacterRepository, InMemoryContentRepository};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinefiller_api::state::AppState;

/// Build the app router over the sample project `p1`.
pub fn build_test_app() -> Router {
    build_test_app_with(
        Arc::new(InMemoryContentRepository::new(sample_scripts())),
        Arc::new(InMemoryCharacterRepository::new().with_characters("p1", sample_characters())),
    )
}

/// Build the app router over the given repositories.
pub fn build_test_app_with(
    content: Arc<dyn ContentRepository>,
    characters: Arc<dyn CharacterRepository>,
) -> Router {
    cinefiller_api::app(AppState::new(content, characters))
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
