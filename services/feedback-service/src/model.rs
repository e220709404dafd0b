// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Feedback data model.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A stored feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Submitter name (trimmed)
    pub name: String,
    /// Submitter email (trimmed, contains `@`)
    pub email: String,
    /// Feedback body (trimmed)
    pub message: String,
    /// Creation time, serialized as RFC 3339 UTC with milliseconds
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a record from validated input, stamped with the current time.
    pub fn new(id: u64, feedback: NewFeedback) -> Self {
        Self {
            id,
            name: feedback.name,
            email: feedback.email,
            message: feedback.message,
            // Millisecond precision so the stored value survives a serialize/parse cycle.
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Feedback that passed validation; all fields trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of `POST /submit`.
///
/// Fields are optional so that missing ones can be reported by name instead
/// of surfacing as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
