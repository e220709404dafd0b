// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the feedback service

use crate::handlers::ErrorResponse;
use crate::store::StoreError;
use crate::validator::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned to clients when a submission cannot be stored.
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to save feedback. Please try again later.";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Validation(err) => ErrorResponse::new(err.to_string(), err.code()),
            // Storage details stay in the logs.
            Self::Storage(_) => ErrorResponse::new(STORAGE_FAILURE_MESSAGE, "STORAGE_ERROR"),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
