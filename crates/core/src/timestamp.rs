// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width status timestamps.
//!
//! Records store wall-clock time as a 14-digit `YYYYMMDDHHMMSS` string with
//! no zone. Reports render the same instant as `YYYY-MM-DD HH:MM:SS`.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// On-disk format (chrono strftime syntax).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const WIDTH: usize = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp {0:?} is not 14 digits (expected YYYYMMDDHHMMSS)")]
    Shape(String),
    #[error("timestamp {input:?} is not a valid date-time: {reason}")]
    Invalid { input: String, reason: String },
}

/// A status timestamp with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(at: NaiveDateTime) -> Self {
        // Sub-second precision is not representable on disk
        Self(at.with_nanosecond(0).unwrap_or(at))
    }

    /// Parse the on-disk `YYYYMMDDHHMMSS` form.
    ///
    /// chrono accepts variable-width fields, so the 14-digit shape is
    /// checked up front.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        if s.len() != WIDTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::Shape(s.to_string()));
        }
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Self).map_err(|e| {
            TimestampError::Invalid { input: s.to_string(), reason: e.to_string() }
        })
    }

    /// The on-disk form.
    pub fn to_compact(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_compact())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
