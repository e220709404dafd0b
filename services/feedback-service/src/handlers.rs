// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP handlers for the feedback service.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::model::{FeedbackRecord, SubmitRequest};
use crate::store::FeedbackStore;
use crate::validator::{validate_submission, ValidationError};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Confirmation text returned by a successful `POST /submit`.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Feedback submitted successfully!";

/// Shared application state.
pub struct AppState {
    pub store: FeedbackStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: FeedbackStore, config: Config) -> Self {
        Self { store, config }
    }
}

/// Error response body.
///
/// The text is carried under both `error` and `message` so clients reading
/// either key get it.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
    pub message: String,
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: &'static str) -> Self {
        let message = message.into();
        Self {
            status: "error",
            error: message.clone(),
            message,
            code,
        }
    }
}

/// Successful submission response.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "feedback-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Validate and store a feedback submission.
///
/// Body rejections (bad JSON, wrong field types, wrong content type) are
/// reported as validation failures so every client error is a 400.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        let err = ValidationError::MalformedBody(rejection.body_text());
        info!(error = %err, "Rejected submission body");
        AppError::from(err)
    })?;

    let feedback = validate_submission(req).inspect_err(|err| {
        info!(error = %err, "Validation failed");
    })?;

    let record = state.store.append(feedback).await.inspect_err(|err| {
        warn!(error = %err, "Could not store feedback");
    })?;

    info!(id = record.id, name = %record.name, "New feedback received");

    Ok(Json(SubmitResponse {
        status: "success",
        message: SUBMIT_SUCCESS_MESSAGE,
    }))
}

/// List all stored feedback in creation order.
pub async fn list_feedbacks(State(state): State<Arc<AppState>>) -> Json<Vec<FeedbackRecord>> {
    Json(state.store.list().await)
}
