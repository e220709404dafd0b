// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-process request helpers built on `tower::ServiceExt::oneshot`.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use feedback_service::{handlers::AppState, router, Config, FeedbackStore};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for Router::oneshot

/// A buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    /// The human-readable error text, from whichever key carries it.
    pub fn error_text(&self) -> String {
        let body = self.json();
        ["error", "message", "validationError"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .expect("error response should carry a message")
            .to_string()
    }
}

/// Router over a fresh in-memory store and default configuration.
pub fn app() -> Router {
    app_with(FeedbackStore::in_memory(), Config::default())
}

pub fn app_with(store: FeedbackStore, config: Config) -> Router {
    router(Arc::new(AppState::new(store, config)))
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

/// `GET /feedbacks` decoded as an array.
pub async fn list(app: &Router) -> Vec<Value> {
    let response = get(app, "/feedbacks").await;
    assert_eq!(response.status, StatusCode::OK);
    response
        .json()
        .as_array()
        .expect("feedback list should be a JSON array")
        .clone()
}
