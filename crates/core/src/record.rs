// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted job records.

use crate::clock::Clock;
use crate::id::JobId;
use crate::state::JobState;
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner process of a job, written as either a JSON integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessId {
    Pid(i64),
    Name(String),
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Pid(pid) => write!(f, "{pid}"),
            ProcessId::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for ProcessId {
    fn from(pid: u32) -> Self {
        ProcessId::Pid(i64::from(pid))
    }
}

impl From<&str> for ProcessId {
    fn from(name: &str) -> Self {
        ProcessId::Name(name.to_string())
    }
}

/// A status at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: JobState,
    pub timestamp: Timestamp,
}

impl StatusSnapshot {
    pub fn new(status: JobState, timestamp: Timestamp) -> Self {
        Self { status, timestamp }
    }
}

/// One job's record file.
///
/// Which directory the file sits in decides the job's state; the embedded
/// `current_status.status` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub ex_id: JobId,
    pub experiment: String,
    pub process_id: ProcessId,
    pub current_status: StatusSnapshot,
    /// Past statuses, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<StatusSnapshot>,
}

impl JobRecord {
    /// A freshly submitted record stamped with the clock's current time.
    pub fn submitted(
        ex_id: JobId,
        experiment: impl Into<String>,
        process_id: impl Into<ProcessId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            ex_id,
            experiment: experiment.into(),
            process_id: process_id.into(),
            current_status: StatusSnapshot::new(JobState::Submitted, clock.now()),
            status_history: Vec::new(),
        }
    }

    pub fn status(&self) -> JobState {
        self.current_status.status
    }

    pub fn timestamp(&self) -> Timestamp {
        self.current_status.timestamp
    }

    /// Push the current status onto the history and replace it.
    pub fn transition(&mut self, to: JobState, clock: &impl Clock) {
        let next = StatusSnapshot::new(to, clock.now());
        let previous = std::mem::replace(&mut self.current_status, next);
        self.status_history.push(previous);
    }

    /// Report ordering: newest first, then by id.
    pub fn recency_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.timestamp().cmp(&self.timestamp()).then_with(|| self.ex_id.cmp(&other.ex_id))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
