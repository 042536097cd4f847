// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed queue store.
//!
//! Layout:
//!
//! ```text
//! <root>/
//!   .lock
//!   submitted/<ex_id>.json
//!   running/<ex_id>.json
//!   completed/<ex_id>.json
//!   failed/<ex_id>.json
//! ```
//!
//! A record's directory is its state. [`QueueGuard::move_job`] is the only
//! code path that relocates records, so a job is always stored in exactly
//! one directory.

use std::fs;
use std::path::{Path, PathBuf};

use exq_core::id::RESERVED_SUFFIXES;
use exq_core::{Clock, JobId, JobRecord, JobState};
use tracing::{debug, info, warn};

use crate::error::{InvalidRecord, StorageError};
use crate::lock::{LockWait, QueueLock};
use crate::snapshot::QueueSnapshot;

/// Name of the queue-wide lock file under the root.
pub const LOCK_FILE: &str = ".lock";

/// A queue root directory.
#[derive(Debug, Clone)]
pub struct QueueDir {
    root: PathBuf,
}

impl QueueDir {
    /// Open the queue at `root`, creating it (and parents) if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|source| StorageError::QueueRootUnavailable { path: root.clone(), source })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILE)
    }

    pub fn state_dir(&self, state: JobState) -> PathBuf {
        self.root.join(state.dir_name())
    }

    fn record_path(&self, state: JobState, id: &JobId) -> PathBuf {
        self.state_dir(state).join(id.file_name())
    }

    /// Take the queue lock. All record access happens through the guard.
    pub fn lock(&self, wait: LockWait) -> Result<QueueGuard<'_>, StorageError> {
        let lock = QueueLock::acquire(&self.lock_path(), wait)?;
        Ok(QueueGuard { queue: self, _lock: lock })
    }
}

/// Records read from one state directory.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Parsed records, newest first.
    pub records: Vec<JobRecord>,
    /// Files that could not be parsed, by path.
    pub rejected: Vec<InvalidRecord>,
}

/// Exclusive access to a queue for as long as it lives.
#[derive(Debug)]
pub struct QueueGuard<'q> {
    queue: &'q QueueDir,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    _lock: QueueLock,
}

impl QueueGuard<'_> {
    /// Make sure a state directory exists.
    fn ensure_dir(&self, state: JobState) -> Result<PathBuf, StorageError> {
        let dir = self.queue.state_dir(state);
        fs::create_dir_all(&dir)
            .map_err(|source| StorageError::QueueRootUnavailable { path: dir.clone(), source })?;
        Ok(dir)
    }

    /// Read every record in a state directory.
    ///
    /// Core state directories are created if missing; `failed/` is not.
    /// Unparseable files are logged and returned in [`Scan::rejected`].
    pub fn scan(&self, state: JobState) -> Result<Scan, StorageError> {
        let dir = if state.is_core() {
            self.ensure_dir(state)?
        } else {
            let dir = self.queue.state_dir(state);
            if !dir.is_dir() {
                return Ok(Scan::default());
            }
            dir
        };

        let entries = fs::read_dir(&dir).map_err(|e| StorageError::io(&dir, e))?;
        let mut scan = Scan::default();
        for entry in entries {
            let path = entry.map_err(|e| StorageError::io(&dir, e))?.path();
            if !is_record_file(&path) {
                debug!(path = %path.display(), "skipping non-record entry");
                continue;
            }
            match read_record(&path) {
                Ok(record) => scan.records.push(record),
                Err(invalid) => {
                    warn!(
                        path = %invalid.path.display(),
                        reason = %invalid.reason,
                        "skipping invalid record"
                    );
                    scan.rejected.push(invalid);
                }
            }
        }

        scan.records.sort_by(JobRecord::recency_cmp);
        scan.rejected.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(
            state = %state,
            records = scan.records.len(),
            rejected = scan.rejected.len(),
            "scanned state directory"
        );
        Ok(scan)
    }

    /// Scan every state directory into report sections.
    pub fn snapshot(&self) -> Result<QueueSnapshot, StorageError> {
        let submitted = self.scan(JobState::Submitted)?;
        let running = self.scan(JobState::Running)?;
        let finished = JobState::ALL
            .into_iter()
            .filter(JobState::is_terminal)
            .map(|state| self.scan(state))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QueueSnapshot::assemble(running, submitted, finished))
    }

    /// Which state directory currently holds `id`, if any.
    pub fn find(&self, id: &JobId) -> Option<JobState> {
        JobState::ALL.into_iter().find(|state| self.queue.record_path(*state, id).is_file())
    }

    /// Read a single record from a state directory.
    pub fn read(&self, id: &JobId, state: JobState) -> Result<JobRecord, StorageError> {
        id.validate()?;
        let path = self.queue.record_path(state, id);
        if !path.is_file() {
            return Err(StorageError::JobNotFound { id: id.clone(), state });
        }
        Ok(read_record(&path)?)
    }

    /// Write a new record into `submitted/`.
    pub fn submit(&self, record: &JobRecord) -> Result<PathBuf, StorageError> {
        let id = &record.ex_id;
        id.validate()?;
        if record.status() != JobState::Submitted {
            return Err(StorageError::NotSubmitted { id: id.clone(), found: record.status() });
        }
        if let Some(state) = self.find(id) {
            return Err(StorageError::DuplicateJob { id: id.clone(), state });
        }

        self.ensure_dir(JobState::Submitted)?;
        let path = self.queue.record_path(JobState::Submitted, id);
        write_record(&path, record)?;
        info!(job_id = %id, experiment = %record.experiment, "submitted job");
        Ok(path)
    }

    /// Relocate a job between state directories and stamp the new status.
    ///
    /// The file is renamed first and then rewritten in place, so at no
    /// point does the job exist in two directories or in none.
    pub fn move_job(
        &self,
        id: &JobId,
        from: JobState,
        to: JobState,
        clock: &impl Clock,
    ) -> Result<JobRecord, StorageError> {
        id.validate()?;
        if !from.can_transition_to(to) {
            return Err(StorageError::InvalidTransition { id: id.clone(), from, to });
        }

        let mut record = self.read(id, from)?;
        let src = self.queue.record_path(from, id);

        self.ensure_dir(to)?;
        let dst = self.queue.record_path(to, id);
        if dst.exists() {
            return Err(StorageError::DuplicateJob { id: id.clone(), state: to });
        }

        fs::rename(&src, &dst).map_err(|e| StorageError::io(&src, e))?;
        record.transition(to, clock);
        write_record(&dst, &record)?;

        info!(job_id = %id, %from, %to, "moved job");
        Ok(record)
    }
}

/// Lock and temp files are skipped; any other regular file is a record,
/// whatever its name's encoding.
fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    if RESERVED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix.as_bytes())) {
        return false;
    }
    // Follows symlinks
    path.is_file()
}

fn read_record(path: &Path) -> Result<JobRecord, InvalidRecord> {
    let invalid = |reason: String| InvalidRecord { path: path.to_owned(), reason };
    let bytes = fs::read(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| invalid(e.to_string()))
}

/// Write through a sibling `.tmp` file and rename over the target.
fn write_record(path: &Path, record: &JobRecord) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(record)
        .map_err(|source| StorageError::Serialize { id: record.ex_id.clone(), source })?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
