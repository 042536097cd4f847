// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use exq_storage::StorageError;

pub mod codes {
    pub const FAILURE: i32 = 1;
    /// Queue root or a state directory could not be created.
    pub const QUEUE_ROOT_UNAVAILABLE: i32 = 2;
    /// The queue lock was not acquired before the timeout.
    pub const LOCK_UNAVAILABLE: i32 = 3;
}

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<StorageError> for ExitError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::QueueRootUnavailable { .. } => codes::QUEUE_ROOT_UNAVAILABLE,
            StorageError::LockUnavailable { .. } => codes::LOCK_UNAVAILABLE,
            _ => codes::FAILURE,
        };
        Self::new(code, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Exit code for an error returned from a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map_or(codes::FAILURE, |e| e.code)
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
