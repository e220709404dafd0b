// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Feedback submission validator.
//!
//! Checks run in a fixed order and the first failing stage wins:
//! - all of `name`, `email`, `message` present
//! - none of them empty or whitespace-only
//! - `email` contains `@`

use crate::model::{NewFeedback, SubmitRequest};
use thiserror::Error;
use tracing::debug;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Fields must not be empty or whitespace only: {}", .0.join(", "))]
    BlankFields(Vec<&'static str>),

    #[error("Invalid email address: email must contain '@'")]
    InvalidEmail,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl ValidationError {
    /// Machine-readable code carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::BlankFields(_) => "BLANK_FIELDS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MalformedBody(_) => "MALFORMED_BODY",
        }
    }
}

/// Validate a submission and return its trimmed fields.
pub fn validate_submission(req: SubmitRequest) -> Result<NewFeedback, ValidationError> {
    let SubmitRequest {
        name,
        email,
        message,
    } = req;

    let (name, email, message) = match (name, email, message) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        (name, email, message) => {
            let missing: Vec<&'static str> = [
                ("name", name.is_none()),
                ("email", email.is_none()),
                ("message", message.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            debug!(?missing, "Missing required fields");
            return Err(ValidationError::MissingFields(missing));
        }
    };

    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    let blank: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
        .into_iter()
        .filter_map(|(field, value)| value.is_empty().then_some(field))
        .collect();
    if !blank.is_empty() {
        debug!(?blank, "Blank fields");
        return Err(ValidationError::BlankFields(blank));
    }

    if !email.contains('@') {
        debug!(email = %email, "Email missing '@'");
        return Err(ValidationError::InvalidEmail);
    }

    Ok(NewFeedback {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
