// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface specs

use super::prelude::*;

#[test]
fn help_mentions_queue_path() {
    let out = stdout_of({
        let mut cmd = exstat();
        cmd.arg("--help");
        cmd
    });
    assert!(out.contains("--queue-path"), "help was: {out}");
}

#[test]
fn version_prints_package_version() {
    let out = stdout_of({
        let mut cmd = exstat();
        cmd.arg("--version");
        cmd
    });
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    exstat().arg("--follow").assert().failure();
}

#[test]
fn underscore_alias_is_accepted() {
    let queue = Queue::fresh();
    exstat().arg("--queue_path").arg(queue.root()).assert().success();
    assert!(queue.root().is_dir());
}

#[test]
fn queue_dir_env_is_used_without_flag() {
    let queue = Queue::fresh();
    queue.job("running", "r1", "bert", "20240101120000");

    let out = stdout_of({
        let mut cmd = exstat();
        cmd.env("EXQ_QUEUE_DIR", queue.root());
        cmd
    });
    assert!(out.contains("(r1)"));
}

#[test]
fn uncreatable_root_exits_with_code_2() {
    let queue = Queue::fresh();
    std::fs::create_dir_all(queue.root().parent().unwrap()).unwrap();
    std::fs::write(queue.root(), "a file, not a directory").unwrap();

    let output = queue.exstat().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot create queue directory"), "stderr was: {stderr}");
}
