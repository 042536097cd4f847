// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! exstat: print the status of an experiment queue

mod color;
mod env;
mod exit_error;
mod logging;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::exit_error::ExitError;

#[derive(Parser, Debug)]
#[command(
    name = "exstat",
    version,
    about = "Show running, submitted and finished jobs in an experiment queue",
    styles = color::styles()
)]
struct Cli {
    /// Queue root directory [default: $EXQ_QUEUE_DIR or ~/.default_queue]
    #[arg(short = 'q', long = "queue-path", visible_alias = "queue_path", value_name = "PATH")]
    queue_path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(exit_error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = env::queue_path(cli.queue_path)?;
    let wait = env::lock_wait();
    debug!(root = %root.display(), ?wait, "reading queue");

    let snapshot = exq_storage::report(&root, wait).map_err(ExitError::from)?;

    let mut stdout = std::io::stdout().lock();
    report::render(&snapshot, &mut stdout, color::should_colorize())
        .context("failed to write report")?;
    Ok(())
}
