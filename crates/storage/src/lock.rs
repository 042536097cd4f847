// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue-wide advisory lock.
//!
//! Cooperative: every submitter, runner and reader of a queue takes the
//! same exclusive `flock` on `<root>/.lock` before touching records.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fs2::FileExt;
use tracing::{debug, warn};

use crate::error::StorageError;

/// Interval between attempts when waiting with a timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long to wait for the queue lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockWait {
    /// Block until the lock is free.
    #[default]
    Block,
    /// Give up with [`StorageError::LockUnavailable`] after the duration.
    Timeout(Duration),
}

/// An exclusively held queue lock, released on drop.
#[derive(Debug)]
pub struct QueueLock {
    file: File,
    path: PathBuf,
}

impl QueueLock {
    pub fn acquire(path: &Path, wait: LockWait) -> Result<Self, StorageError> {
        // Never truncate: the file may be held by another process
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StorageError::io(path, e))?;

        match wait {
            LockWait::Block => {
                file.lock_exclusive().map_err(|e| StorageError::io(path, e))?;
            }
            LockWait::Timeout(limit) => lock_with_timeout(&file, path, limit)?,
        }

        debug!(path = %path.display(), "acquired queue lock");
        Ok(Self { file, path: path.to_owned() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn lock_with_timeout(file: &File, path: &Path, limit: Duration) -> Result<(), StorageError> {
    let started = Instant::now();
    loop {
        match file.try_lock_exclusive() {
            Ok(()) => return Ok(()),
            Err(e) if is_contended(&e) => {
                let waited = started.elapsed();
                if waited >= limit {
                    return Err(StorageError::LockUnavailable { path: path.to_owned(), waited });
                }
                std::thread::sleep(POLL_INTERVAL.min(limit - waited));
            }
            Err(e) => return Err(StorageError::io(path, e)),
        }
    }
}

fn is_contended(err: &std::io::Error) -> bool {
    err.kind() == std::io::ErrorKind::WouldBlock
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

impl Drop for QueueLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(path = %self.path.display(), error = %e, "failed to release queue lock");
        } else {
            debug!(path = %self.path.display(), "released queue lock");
        }
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
