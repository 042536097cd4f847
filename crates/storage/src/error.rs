// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use exq_core::{JobId, JobIdError, JobState};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A record file that could not be read or parsed.
///
/// Scans collect these instead of failing, so one bad file never hides
/// the rest of the queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record {}: {reason}", .path.display())]
pub struct InvalidRecord {
    pub path: PathBuf,
    pub reason: String,
}

/// Errors that can occur in queue storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecord),
    #[error("queue lock {} unavailable after {waited:?}", .path.display())]
    LockUnavailable { path: PathBuf, waited: Duration },
    #[error("cannot create queue directory {}: {source}", .path.display())]
    QueueRootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("job {id} not found in {state}")]
    JobNotFound { id: JobId, state: JobState },
    #[error("job {id} already exists in {state}")]
    DuplicateJob { id: JobId, state: JobState },
    #[error("job {id} cannot move from {from} to {to}")]
    InvalidTransition { id: JobId, from: JobState, to: JobState },
    #[error("job {id} must be submitted with status submitted, not {found}")]
    NotSubmitted { id: JobId, found: JobState },
    #[error(transparent)]
    InvalidJobId(#[from] JobIdError),
    #[error("cannot serialize job {id}: {source}")]
    Serialize {
        id: JobId,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io { path: path.into(), source }
    }
}
