// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// Fixture helpers panic on malformed input
#![allow(clippy::expect_used)]

use crate::{JobId, JobRecord, JobState, ProcessId, StatusSnapshot, Timestamp};

// ── Record builder ──────────────────────────────────────────────────────────

/// Builder for [`JobRecord`] fixtures with test defaults.
pub struct JobRecordBuilder {
    ex_id: String,
    experiment: String,
    process_id: ProcessId,
    status: JobState,
    timestamp: String,
    history: Vec<StatusSnapshot>,
}

impl Default for JobRecordBuilder {
    fn default() -> Self {
        Self {
            ex_id: "job-1".to_string(),
            experiment: "experiment".to_string(),
            process_id: ProcessId::Pid(1234),
            status: JobState::Submitted,
            timestamp: "20240101000000".to_string(),
            history: Vec::new(),
        }
    }
}

impl JobRecordBuilder {
    pub fn ex_id(mut self, v: impl Into<String>) -> Self {
        self.ex_id = v.into();
        self
    }

    pub fn experiment(mut self, v: impl Into<String>) -> Self {
        self.experiment = v.into();
        self
    }

    pub fn process_id(mut self, v: impl Into<ProcessId>) -> Self {
        self.process_id = v.into();
        self
    }

    pub fn status(mut self, v: JobState) -> Self {
        self.status = v;
        self
    }

    /// Status timestamp in `YYYYMMDDHHMMSS` form.
    pub fn at(mut self, v: impl Into<String>) -> Self {
        self.timestamp = v.into();
        self
    }

    pub fn history(mut self, status: JobState, at: &str) -> Self {
        self.history.push(StatusSnapshot::new(status, parse(at)));
        self
    }

    pub fn build(self) -> JobRecord {
        JobRecord {
            ex_id: JobId::new(self.ex_id).expect("fixture ex_id"),
            experiment: self.experiment,
            process_id: self.process_id,
            current_status: StatusSnapshot::new(self.status, parse(&self.timestamp)),
            status_history: self.history,
        }
    }
}

impl JobRecord {
    /// Create a builder with test defaults.
    pub fn builder() -> JobRecordBuilder {
        JobRecordBuilder::default()
    }
}

fn parse(ts: &str) -> Timestamp {
    Timestamp::parse(ts).expect("fixture timestamp")
}

// ── Proptest strategies ─────────────────────────────────────────────────────

/// Proptest strategies for record types.
pub mod strategies {
    use crate::{JobRecord, JobState, Timestamp};
    use proptest::prelude::*;

    pub fn arb_job_state() -> impl Strategy<Value = JobState> {
        prop_oneof![
            Just(JobState::Submitted),
            Just(JobState::Running),
            Just(JobState::Completed),
            Just(JobState::Failed),
        ]
    }

    /// Timestamps within a couple of days, so ties are common.
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        (1u32..=2, 0u32..24, 0u32..2).prop_map(|(day, hour, minute)| {
            let raw = format!("202401{day:02}{hour:02}{minute:02}00");
            Timestamp::parse(&raw).expect("generated timestamp")
        })
    }

    pub fn arb_record() -> impl Strategy<Value = JobRecord> {
        ("[a-z][a-z0-9]{0,6}", arb_job_state(), arb_timestamp()).prop_map(|(id, status, ts)| {
            JobRecord::builder().ex_id(id).status(status).at(ts.to_compact()).build()
        })
    }
}
