// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of a queue snapshot.
//!
//! ```text
//! [running] bert-base 2024-01-01 12:00:00 (r1) - 4242
//! --------------------------
//! [submitted] roberta 2024-01-02 00:00:00 (s1) - 4243
//! --------------------------
//!     [completed] distil 2023-12-31 09:30:00 (c1) - 4100
//! ```

use std::io::{self, Write};

use exq_core::JobRecord;
use exq_storage::QueueSnapshot;

use crate::color;

pub const SEPARATOR: &str = "--------------------------";

/// One report line: `[STATUS] EXPERIMENT TIMESTAMP (EX_ID) - PROCESS_ID`.
pub fn format_line(record: &JobRecord) -> String {
    format!(
        "[{}] {} {} ({}) - {}",
        record.status(),
        record.experiment,
        record.timestamp(),
        record.ex_id,
        record.process_id
    )
}

/// Write running jobs, then submitted, then indented finished jobs.
pub fn render(snapshot: &QueueSnapshot, out: &mut impl Write, colorize: bool) -> io::Result<()> {
    for record in &snapshot.running {
        writeln!(out, "{}", format_line(record))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for record in &snapshot.submitted {
        writeln!(out, "{}", format_line(record))?;
    }
    writeln!(out, "{SEPARATOR}")?;
    for record in &snapshot.finished {
        let line = format_line(record);
        if colorize {
            writeln!(out, "\t{}", color::paint(color::codes::MUTED, &line))?;
        } else {
            writeln!(out, "\t{line}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
