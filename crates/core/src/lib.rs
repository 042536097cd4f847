// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! exq-core: job record data model for the experiment queue

pub mod macros;

pub mod clock;
pub mod id;
pub mod record;
pub mod state;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{JobId, JobIdError};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::JobRecordBuilder;
pub use record::{JobRecord, ProcessId, StatusSnapshot};
pub use state::{JobState, UnknownState};
pub use timestamp::{Timestamp, TimestampError, TIMESTAMP_FORMAT};
