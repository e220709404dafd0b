// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Append-only feedback store.
//!
//! Records and the id counter share one mutex, so assigning an id, appending
//! the record and snapshotting to disk happen as a single step. When a data
//! file is configured the full record list is rewritten after every append
//! (temp file + rename) and reloaded on open.

use crate::config::StorageConfig;
use crate::model::{FeedbackRecord, NewFeedback, SubmitRequest};
use crate::validator::validate_submission;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize feedback records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupt data file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Feedback id space exhausted")]
    IdSpaceExhausted,
}

#[derive(Debug)]
struct StoreState {
    records: Vec<FeedbackRecord>,
    /// `None` once the last representable id has been handed out.
    next_id: Option<u64>,
}

/// Thread-safe feedback store.
#[derive(Debug)]
pub struct FeedbackStore {
    state: Mutex<StoreState>,
    data_file: Option<PathBuf>,
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl FeedbackStore {
    /// Create an empty, memory-only store.
    pub fn in_memory() -> Self {
        Self {
            state: Mutex::new(StoreState {
                records: Vec::new(),
                next_id: Some(1),
            }),
            data_file: None,
        }
    }

    /// Open a store according to the storage configuration.
    pub async fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        match &config.data_file {
            Some(path) => Self::open_file(path).await,
            None => Ok(Self::in_memory()),
        }
    }

    /// Open a store backed by a JSON data file.
    ///
    /// A missing or blank file yields an empty store. Anything else must be
    /// a JSON array of records with unique ids whose fields would pass
    /// submission validation unchanged.
    pub async fn open_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let mut records = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Vec::new(),
            Ok(raw) => serde_json::from_str::<Vec<FeedbackRecord>>(&raw).map_err(|e| {
                StoreError::Corrupt {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        for record in &records {
            check_record(record).map_err(|reason| StoreError::Corrupt {
                path: path.clone(),
                reason,
            })?;
        }

        records.sort_by_key(|r| r.id);
        if let Some(pair) = records.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(StoreError::Corrupt {
                path,
                reason: format!("duplicate id {}", pair[0].id),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let next_id = match records.last() {
            None => 1,
            Some(last) => last.id.checked_add(1).ok_or_else(|| StoreError::Corrupt {
                path: path.clone(),
                reason: format!("record {}: no id left after it", last.id),
            })?,
        };
        info!(path = %path.display(), records = records.len(), next_id, "Loaded feedback store");

        Ok(Self {
            state: Mutex::new(StoreState {
                records,
                next_id: Some(next_id),
            }),
            data_file: Some(path),
        })
    }

    /// Append a validated submission, returning the stored record.
    ///
    /// On a failed snapshot write the record is dropped again; its id stays
    /// consumed.
    pub async fn append(&self, feedback: NewFeedback) -> Result<FeedbackRecord, StoreError> {
        let mut state = self.state.lock().await;

        let id = state.next_id.ok_or_else(|| {
            error!("No feedback ids left");
            StoreError::IdSpaceExhausted
        })?;
        state.next_id = id.checked_add(1);

        let record = FeedbackRecord::new(id, feedback);
        state.records.push(record.clone());

        if let Some(path) = &self.data_file {
            if let Err(e) = persist(path, &state.records).await {
                state.records.pop();
                error!(id, error = %e, "Failed to persist feedback");
                return Err(e);
            }
        }

        debug!(id, total = state.records.len(), "Feedback appended");
        Ok(record)
    }

    /// Snapshot of all records in creation order.
    pub async fn list(&self) -> Vec<FeedbackRecord> {
        self.state.lock().await.records.clone()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    /// Whether no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Check a loaded record against the submission rules: every field must
/// already be trimmed, non-empty, and the email must contain `@`.
fn check_record(record: &FeedbackRecord) -> Result<(), String> {
    let feedback = validate_submission(SubmitRequest {
        name: Some(record.name.clone()),
        email: Some(record.email.clone()),
        message: Some(record.message.clone()),
    })
    .map_err(|e| format!("record {}: {e}", record.id))?;

    if feedback.name != record.name
        || feedback.email != record.email
        || feedback.message != record.message
    {
        return Err(format!(
            "record {}: fields must not have surrounding whitespace",
            record.id
        ));
    }
    Ok(())
}

async fn persist(path: &Path, records: &[FeedbackRecord]) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(records)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, body)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
}
