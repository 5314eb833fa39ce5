// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envprobe using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envprobe [global options]    run the probe, print the report
//! envprobe version             print the crate version
//! ```
//!
//! The zero-argument form is the primary interface: the probe runs
//! when no subcommand is given.

pub mod global;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;

/// Host Environment Probe
///
/// Detects the host operating system, its version, and a small set of
/// session facts (home directory, computer name) and prints them as a
/// line-oriented report, or as JSON with --json.
#[derive(Debug, Parser)]
#[command(
    name = "envprobe",
    author,
    version,
    about = "Host environment probe",
    long_about = "Detects the host operating system, its version, and a small set\n\
                  of environment facts at the start of a shell session, and prints\n\
                  them for later scripts to consume.\n\n\
                  Run with no arguments to print the human-readable report. Use\n\
                  --json to emit the facts as a machine-readable record instead."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
