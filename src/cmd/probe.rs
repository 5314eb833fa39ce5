// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Probe command implementation.

use std::io::Write;

use chrono::Local;

use crate::error::Result;
use crate::probe::platform::HostPlatform;
use crate::probe::{self, report};

/// Main handler for the probe (zero-argument) invocation.
///
/// Records the start timestamp, probes the host, and writes either the
/// line-oriented report or the JSON record to stdout.
///
/// # Errors
///
/// Returns an error when detection fails (unrecognized macOS version,
/// missing home variable) or when stdout cannot be written.
pub fn run_probe_command(json: bool) -> Result<()> {
    let started = Local::now();

    let source = HostPlatform;
    let facts = probe::probe(&source)?;
    tracing::debug!(
        family = %facts.os_family,
        caption = %facts.os_caption,
        "probe complete"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &facts)?;
        writeln!(&mut out)?;
    } else {
        report::render_report(&mut out, &facts, started)?;
    }

    Ok(())
}
