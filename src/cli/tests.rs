// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for CLI parsing.

use clap::Parser;

use super::{Cli, Command};

#[test]
fn test_zero_argument_invocation() {
    let cli = Cli::try_parse_from(["envprobe"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.global.json);
    assert!(cli.global.log_level.is_none());
}

#[test]
fn test_version_command() {
    let cli = Cli::try_parse_from(["envprobe", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_json_flag() {
    let cli = Cli::try_parse_from(["envprobe", "--json"]).unwrap();
    assert!(cli.global.json);
}

#[test]
fn test_log_level_range() {
    let cli = Cli::try_parse_from(["envprobe", "-l", "4"]).unwrap();
    assert_eq!(cli.global.log_level, Some(4));

    assert!(Cli::try_parse_from(["envprobe", "-l", "7"]).is_err());
}

#[test]
fn test_log_file_option() {
    let cli = Cli::try_parse_from(["envprobe", "--log-file", "probe.log"]).unwrap();
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("probe.log"))
    );
}
