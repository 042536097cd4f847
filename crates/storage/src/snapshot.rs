// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report sections assembled from a locked scan.

use exq_core::JobRecord;

use crate::error::InvalidRecord;
use crate::queue::Scan;

/// A consistent view of the queue, grouped the way the status report
/// prints it. Each section is ordered newest first, ties by `ex_id`.
#[derive(Debug, Clone, Default)]
pub struct QueueSnapshot {
    pub running: Vec<JobRecord>,
    pub submitted: Vec<JobRecord>,
    /// Completed and failed jobs.
    pub finished: Vec<JobRecord>,
    pub rejected: Vec<InvalidRecord>,
}

impl QueueSnapshot {
    pub(crate) fn assemble(
        running: Scan,
        submitted: Scan,
        finished: impl IntoIterator<Item = Scan>,
    ) -> Self {
        let mut snapshot = Self::default();
        snapshot.absorb_rejected(&running);
        snapshot.absorb_rejected(&submitted);
        snapshot.running = running.records;
        snapshot.submitted = submitted.records;

        for scan in finished {
            snapshot.absorb_rejected(&scan);
            snapshot.finished.extend(scan.records);
        }
        snapshot.finished.sort_by(JobRecord::recency_cmp);
        snapshot
    }

    fn absorb_rejected(&mut self, scan: &Scan) {
        self.rejected.extend(scan.rejected.iter().cloned());
    }

    /// Number of valid records across all sections.
    pub fn len(&self) -> usize {
        self.running.len() + self.submitted.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
