// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job states and the directories that hold them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of a job.
///
/// Each state owns one subdirectory of the queue root; a record's
/// directory is what decides its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Submitted,
    Running,
    Completed,
    Failed,
}

/// A status name that is not one of the known job states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job state: {0:?}")]
pub struct UnknownState(pub String);

crate::named_variants! {
    JobState, UnknownState {
        Submitted => "submitted",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
    }
}

impl JobState {
    /// Every state, in lifecycle order.
    pub const ALL: [JobState; 4] =
        [JobState::Submitted, JobState::Running, JobState::Completed, JobState::Failed];

    /// States whose directories always exist (created lazily on first scan).
    pub const CORE: [JobState; 3] = [JobState::Submitted, JobState::Running, JobState::Completed];

    /// Subdirectory name under the queue root.
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// Whether the state directory is created on first access.
    ///
    /// `failed/` only appears once a runner moves a job there.
    pub fn is_core(&self) -> bool {
        !matches!(self, JobState::Failed)
    }

    /// Terminal states end up in the last report section.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }

    /// Whether a writer may relocate a record from `self` to `to`.
    pub fn can_transition_to(&self, to: JobState) -> bool {
        use JobState::*;
        matches!(
            (self, to),
            (Submitted, Running)
                | (Submitted, Failed)
                | (Running, Completed)
                | (Running, Failed)
                | (Running, Submitted)
                | (Failed, Submitted)
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
