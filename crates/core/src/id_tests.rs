// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

#[test]
fn valid_id_round_trips_through_display() {
    let id = JobId::new("bert-lr-3e5").unwrap();
    assert_eq!(id.to_string(), "bert-lr-3e5");
    assert_eq!(id, "bert-lr-3e5");
}

#[test]
fn file_name_appends_json() {
    let id = JobId::new("r1").unwrap();
    assert_eq!(id.file_name(), "r1.json");
}

#[test]
fn hash_map_lookup_by_str() {
    let mut map = HashMap::new();
    map.insert(JobId::new("k").unwrap(), 42);
    assert_eq!(map.get("k"), Some(&42));
}

#[yare::parameterized(
    empty     = { "",           JobIdError::Empty },
    slash     = { "a/b",        JobIdError::PathSeparator("a/b".into()) },
    backslash = { "a\\b",       JobIdError::PathSeparator("a\\b".into()) },
    dot       = { ".",          JobIdError::Relative(".".into()) },
    dotdot    = { "..",         JobIdError::Relative("..".into()) },
    lock      = { "job.lock",   JobIdError::ReservedSuffix { id: "job.lock".into(), suffix: ".lock" } },
    tmp       = { "job.tmp",    JobIdError::ReservedSuffix { id: "job.tmp".into(), suffix: ".tmp" } },
)]
fn rejects_unsafe_ids(input: &str, expected: JobIdError) {
    assert_eq!(JobId::new(input).unwrap_err(), expected);
}

#[test]
fn deserialization_does_not_validate() {
    let id: JobId = serde_json::from_str("\"odd/name\"").unwrap();
    assert_eq!(id.as_str(), "odd/name");
    assert!(id.validate().is_err());
}

#[test]
fn serde_is_transparent() {
    let id = JobId::new("my-job").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"my-job\"");
}
