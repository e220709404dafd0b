// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Feedback Service
//!
//! A small feedback-collection web service:
//!
//! - `POST /submit` validates a `{name, email, message}` submission and
//!   appends it to the store with a sequential id and a UTC timestamp
//! - `GET /feedbacks` lists every stored submission in creation order
//! - everything else is served from the frontend asset directory, with 404
//!   for unknown paths
//!
//! Records live in memory, optionally snapshotted to a JSON data file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;
pub mod validator;

pub use config::Config;
pub use error::AppError;
pub use model::{FeedbackRecord, NewFeedback, SubmitRequest};
pub use store::{FeedbackStore, StoreError};
pub use validator::{validate_submission, ValidationError};

use axum::{
    routing::{get, post},
    Router,
};
use handlers::{health, list_feedbacks, submit, AppState};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the service router: API routes, static asset fallback, tracing and
/// (when enabled) permissive CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    let mut app = Router::new()
        .route("/submit", post(submit))
        .route("/feedbacks", get(list_feedbacks))
        .route("/health", get(health))
        .route("/healthz", get(health))
        .fallback_service(assets);

    if state.config.cors.enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
