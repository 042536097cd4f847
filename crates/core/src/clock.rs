// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable status timestamps

use crate::timestamp::Timestamp;
use chrono::{Duration, Local, NaiveDate};
use parking_lot::Mutex;
use std::sync::Arc;

/// A clock that stamps status transitions
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Local wall-clock time
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Local::now().naive_local())
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Timestamp>>,
}

impl FakeClock {
    /// Start the clock at 2024-01-01 00:00:00.
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self::at(Timestamp::new(start))
    }

    pub fn at(start: Timestamp) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Advance the clock by the given number of seconds
    pub fn advance_secs(&self, secs: i64) {
        let mut current = self.current.lock();
        if let Some(next) = current.as_naive().checked_add_signed(Duration::seconds(secs)) {
            *current = Timestamp::new(next);
        }
    }

    pub fn set(&self, at: Timestamp) {
        *self.current.lock() = at;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
