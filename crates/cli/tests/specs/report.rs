// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report output specs

use super::prelude::*;

#[test]
fn fresh_queue_prints_empty_sections_and_creates_layout() {
    let queue = Queue::fresh();

    let out = stdout_of(queue.exstat());

    assert_text_eq!(out, format!("{SEPARATOR}\n{SEPARATOR}\n"));
    for state in ["submitted", "running", "completed"] {
        assert!(queue.root().join(state).is_dir(), "{state}/ should be created");
    }
    assert!(queue.root().join(".lock").exists());
    assert!(!queue.root().join("failed").exists());
}

#[test]
fn running_then_submitted_then_completed() {
    let queue = Queue::fresh();
    queue
        .job("running", "r1", "bert", "20240101120000")
        .job("submitted", "s1", "roberta", "20240102000000")
        .job("completed", "c1", "albert", "20231231093000");

    let out = stdout_of(queue.exstat());

    let expected = "\
[running] bert 2024-01-01 12:00:00 (r1) - 4242
--------------------------
[submitted] roberta 2024-01-02 00:00:00 (s1) - 4242
--------------------------
\t[completed] albert 2023-12-31 09:30:00 (c1) - 4242
";
    assert_text_eq!(out, expected.to_string());
}

#[test]
fn each_section_is_newest_first_with_id_tiebreak() {
    let queue = Queue::fresh();
    queue
        .job("submitted", "b", "exp", "20240105000000")
        .job("submitted", "a", "exp", "20240105000000")
        .job("submitted", "old", "exp", "20240101000000")
        .job("submitted", "new", "exp", "20240109000000");

    let out = stdout_of(queue.exstat());

    let order: Vec<_> = out
        .lines()
        .filter_map(|l| l.split_once('(').and_then(|(_, rest)| rest.split_once(')')))
        .map(|(id, _)| id)
        .collect();
    assert_eq!(order, vec!["new", "a", "b", "old"]);
}

#[test]
fn running_records_are_not_repeated_as_completed() {
    let queue = Queue::fresh();
    queue.job("running", "r1", "bert", "20240101120000");

    let out = stdout_of(queue.exstat());

    assert_eq!(out.matches("(r1)").count(), 1);
    assert!(out.ends_with(&format!("{SEPARATOR}\n")));
}

#[test]
fn failed_jobs_join_the_finished_section() {
    let queue = Queue::fresh();
    queue
        .job("completed", "c1", "albert", "20240101000000")
        .job("failed", "f1", "distil", "20240102000000");

    let out = stdout_of(queue.exstat());

    let finished: Vec<_> = out.lines().filter(|l| l.starts_with('\t')).collect();
    assert_eq!(
        finished,
        vec![
            "\t[failed] distil 2024-01-02 00:00:00 (f1) - 4242",
            "\t[completed] albert 2024-01-01 00:00:00 (c1) - 4242",
        ]
    );
}

#[test]
fn malformed_records_are_skipped_with_a_warning() {
    let queue = Queue::fresh();
    queue
        .job("running", "r1", "bert", "20240101120000")
        .raw("running", "broken.json", "{not json")
        .job("submitted", "s1", "roberta", "2024-01-02")
        .job("submitted", "s2", "roberta", "20240102000000");

    let output = queue.exstat().output().unwrap();

    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("(r1)"));
    assert!(out.contains("(s2)"));
    assert!(!out.contains("(s1)"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.json"), "stderr was: {stderr}");
    assert!(stderr.contains("s1.json"), "stderr was: {stderr}");
}

#[test]
fn lock_files_and_temp_files_are_ignored() {
    let queue = Queue::fresh();
    queue
        .job("running", "r1", "bert", "20240101120000")
        .raw("running", "r1.json.lock", "")
        .raw("running", "r2.json.tmp", "{\"half\":");

    let output = queue.exstat().output().unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn each_rejected_record_is_reported_once() {
    let queue = Queue::fresh();
    queue
        .raw("running", "broken.json", "{not json")
        .raw("completed", "torn.json", "{\"ex_id\":");

    let output = queue.exstat().env("EXQ_LOG", "debug").output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("broken.json").count(), 1, "stderr was: {stderr}");
    assert_eq!(stderr.matches("torn.json").count(), 1, "stderr was: {stderr}");
    assert!(!stderr.contains("excluded from report"), "stderr was: {stderr}");
}
