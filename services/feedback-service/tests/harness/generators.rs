// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Submission payload generators.

use serde_json::{json, Value};

/// A valid submission unique to `i`.
pub fn valid_payload(i: usize) -> Value {
    json!({
        "name": format!("User {i}"),
        "email": format!("user{i}@example.com"),
        "message": format!("Feedback message from user {i}."),
    })
}

/// Payloads with fields removed, paired with the names that are missing.
pub fn missing_field_cases() -> Vec<(Value, Vec<&'static str>)> {
    vec![
        (
            json!({ "email": "user@example.com", "message": "Test message" }),
            vec!["name"],
        ),
        (json!({ "name": "User", "message": "Test message" }), vec!["email"]),
        (json!({ "name": "User", "email": "user@example.com" }), vec!["message"]),
        (json!({ "name": "User", "email": null }), vec!["email", "message"]),
        (json!({}), vec!["name", "email", "message"]),
    ]
}

/// Payloads where at least one field is blank after trimming.
pub fn whitespace_cases() -> Vec<Value> {
    vec![
        json!({ "name": "   ", "email": "user@example.com", "message": "Hi" }),
        json!({ "name": "User", "email": "   ", "message": "Hi" }),
        json!({ "name": "User", "email": "user@example.com", "message": "\n\t " }),
        json!({ "name": "", "email": "", "message": "" }),
    ]
}

/// Email values without an `@`.
pub fn invalid_emails() -> Vec<&'static str> {
    vec![
        "invalidemailformat.com",
        "plainaddress",
        "user.example.com",
        "  spaced-out  ",
    ]
}
