// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifiers.
//!
//! The `ex_id` doubles as the record's file stem, so ids written through
//! the store must be safe to use as a single path component.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Suffixes reserved for lock files and in-flight writes.
pub const RESERVED_SUFFIXES: [&str; 2] = [".lock", ".tmp"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobIdError {
    #[error("job id is empty")]
    Empty,
    #[error("job id {0:?} contains a path separator")]
    PathSeparator(String),
    #[error("job id {0:?} is a relative path component")]
    Relative(String),
    #[error("job id {id:?} ends with reserved suffix {suffix:?}")]
    ReservedSuffix { id: String, suffix: &'static str },
}

/// Identifier of one experiment/job (`ex_id`).
///
/// Deserialization accepts any string so a reader can still show records
/// written by other tools; [`JobId::validate`] gates what the store writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Create a validated id.
    pub fn new(id: impl Into<String>) -> Result<Self, JobIdError> {
        let id = Self(id.into());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the id can be used as a record file stem.
    pub fn validate(&self) -> Result<(), JobIdError> {
        let id = self.0.as_str();
        if id.is_empty() {
            return Err(JobIdError::Empty);
        }
        if id.contains(['/', '\\', '\0']) {
            return Err(JobIdError::PathSeparator(id.to_string()));
        }
        if id == "." || id == ".." {
            return Err(JobIdError::Relative(id.to_string()));
        }
        if let Some(suffix) = RESERVED_SUFFIXES.into_iter().find(|s| id.ends_with(s)) {
            return Err(JobIdError::ReservedSuffix { id: id.to_string(), suffix });
        }
        Ok(())
    }

    /// Record file name inside a state directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JobId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
