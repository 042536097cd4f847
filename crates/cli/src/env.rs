// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the status tool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use exq_storage::LockWait;

use crate::exit_error::{codes, ExitError};

/// Queue directory under the home directory when nothing else is given.
pub const DEFAULT_QUEUE_DIR: &str = ".default_queue";

/// Default log filter when `EXQ_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve the queue root: `--queue-path` > `EXQ_QUEUE_DIR` > `~/.default_queue`.
pub fn queue_path(flag: Option<PathBuf>) -> Result<PathBuf, ExitError> {
    let home = dirs::home_dir();
    let explicit = flag.or_else(|| {
        std::env::var_os("EXQ_QUEUE_DIR").filter(|v| !v.is_empty()).map(PathBuf::from)
    });
    if let Some(path) = explicit {
        return Ok(expand_home(&path, home.as_deref()));
    }
    home.map(|h| h.join(DEFAULT_QUEUE_DIR)).ok_or_else(|| {
        ExitError::new(
            codes::QUEUE_ROOT_UNAVAILABLE,
            "cannot determine home directory; pass --queue-path",
        )
    })
}

/// Expand a leading `~` against `home`. Other paths pass through.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_owned();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_owned(),
    }
}

/// Lock wait policy: blocking unless `EXQ_LOCK_TIMEOUT_MS` is set.
pub fn lock_wait() -> LockWait {
    std::env::var("EXQ_LOCK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(|ms| LockWait::Timeout(Duration::from_millis(ms)))
        .unwrap_or_default()
}

/// Log filter directive from `EXQ_LOG`.
pub fn log_filter() -> String {
    std::env::var("EXQ_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
