// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for binary specs.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;

pub use similar_asserts::assert_eq as assert_text_eq;

pub const SEPARATOR: &str = "--------------------------";

/// A queue root in a temp directory.
pub struct Queue {
    _dir: TempDir,
    root: PathBuf,
}

impl Queue {
    /// A queue path that does not exist yet.
    pub fn fresh() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("queue");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a record file into `<state>/<ex_id>.json`.
    pub fn job(&self, state: &str, ex_id: &str, experiment: &str, timestamp: &str) -> &Self {
        let body = json!({
            "ex_id": ex_id,
            "experiment": experiment,
            "process_id": 4242,
            "current_status": {"status": state, "timestamp": timestamp},
        });
        self.raw(state, &format!("{ex_id}.json"), &body.to_string())
    }

    /// Write an arbitrary file into a state directory.
    pub fn raw(&self, state: &str, name: &str, content: &str) -> &Self {
        let dir = self.root.join(state);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
        self
    }

    /// `exstat --queue-path <root>` with a clean environment.
    pub fn exstat(&self) -> Command {
        let mut cmd = exstat();
        cmd.arg("--queue-path").arg(&self.root);
        cmd
    }
}

/// The binary with color and env overrides cleared.
pub fn exstat() -> Command {
    let mut cmd = Command::cargo_bin("exstat").unwrap();
    cmd.env_remove("EXQ_QUEUE_DIR")
        .env_remove("EXQ_LOCK_TIMEOUT_MS")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("EXQ_LOG", "warn");
    cmd
}

/// Run and return stdout, asserting success.
pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "exstat failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
