// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented report rendering.
//!
//! The output is order-significant:
//!
//! ```text
//!  ! Start envprobe: 2026 08 30 09:15:02 +00:00
//!  < Platform / hostOS is 'Linux' >
//!  < Platform / hostOSCaption is 'Ubuntu 24.04' >
//!  < HOME is '/home/user' >
//!
//!  # envprobe 0.1.0 on Ubuntu 24.04 - buildbox #
//!
//!  Here are the persistent facts available to later scripts: ...
//!    HOME
//!    ...
//!
//! End : 2026 08 30 09:15:02 +00:00
//! ```
//!
//! Only the two timestamps vary between runs. The fact-name list is
//! advisory text for the operator; the real export is the typed
//! [`EnvironmentFacts`] record (or its `--json` form).

use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::probe::EnvironmentFacts;

/// Fact names advertised to the operator at the end of the report.
pub const FACT_NAMES: [&str; 7] = [
    "HOME",
    "COMPUTERNAME",
    "hostOS",
    "hostOSCaption",
    "IsWindows",
    "IsLinux",
    "IsMacOS",
];

/// Timestamp layout for the start and end banners.
pub const TIMESTAMP_FORMAT: &str = "%Y %m %d %H:%M:%S %Z";

/// Writes the full report for one probe run.
///
/// `started` is the timestamp recorded before detection began; the end
/// banner takes a fresh one at write time.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_report<W: Write>(
    out: &mut W,
    facts: &EnvironmentFacts,
    started: DateTime<Local>,
) -> io::Result<()> {
    let program = env!("CARGO_PKG_NAME");

    writeln!(out)?;
    writeln!(out, " ! Start {program}: {}", started.format(TIMESTAMP_FORMAT))?;

    writeln!(out, " < Platform / hostOS is '{}' >", facts.os_family)?;
    writeln!(out, " < Platform / hostOSCaption is '{}' >", facts.os_caption)?;
    writeln!(out, " < HOME is '{}' >", facts.home_directory.display())?;

    writeln!(out)?;
    writeln!(
        out,
        " # {program} {} on {} - {} #",
        env!("CARGO_PKG_VERSION"),
        facts.os_caption,
        facts.computer_name
    )?;

    writeln!(out)?;
    writeln!(out, " Here are the persistent facts available to later scripts: ...")?;
    for name in FACT_NAMES {
        writeln!(out, "   {name}")?;
    }

    writeln!(out)?;
    writeln!(out, "End : {}", Local::now().format(TIMESTAMP_FORMAT))?;

    Ok(())
}
