// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! exq-storage: directory-backed experiment queue
//!
//! A queue root holds one subdirectory per [`JobState`](exq_core::JobState)
//! and a `.lock` file. Every read or write goes through a [`QueueGuard`],
//! which holds the queue-wide advisory lock for its lifetime.

mod error;
mod lock;
mod queue;
mod snapshot;

pub use error::{InvalidRecord, StorageError};
pub use lock::{LockWait, QueueLock};
pub use queue::{QueueDir, QueueGuard, Scan, LOCK_FILE};
pub use snapshot::QueueSnapshot;

use std::path::Path;

/// Take a locked snapshot of the queue at `root`, creating it if needed.
///
/// The lock is released before this returns, on success or error.
pub fn report(root: &Path, wait: LockWait) -> Result<QueueSnapshot, StorageError> {
    let queue = QueueDir::open(root)?;
    let guard = queue.lock(wait)?;
    guard.snapshot()
}
