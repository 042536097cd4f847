// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue lock specs

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use fs2::FileExt;

use super::prelude::*;

fn hold_lock(queue: &Queue) -> std::fs::File {
    std::fs::create_dir_all(queue.root()).unwrap();
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(queue.root().join(".lock"))
        .unwrap();
    file.lock_exclusive().unwrap();
    file
}

#[test]
fn held_lock_with_timeout_exits_with_code_3() {
    let queue = Queue::fresh();
    let _held = hold_lock(&queue);

    let output = queue.exstat().env("EXQ_LOCK_TIMEOUT_MS", "200").output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unavailable"), "stderr was: {stderr}");
}

#[test]
fn blocked_report_runs_after_release() {
    let queue = Queue::fresh();
    queue.job("running", "r1", "bert", "20240101120000");
    let held = hold_lock(&queue);

    let cmd = queue.exstat();
    let started = Instant::now();
    let releaser = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(300));
        drop(held);
    });

    let out = stdout_of(cmd);
    releaser.join().unwrap();

    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(out.contains("(r1)"));
}
