// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the probe and its report.
//!
//! Drives the public probe API end to end with scripted platforms and
//! checks the stdout contract: fixed line order, timestamp layout, and
//! the JSON form of the facts record.

use chrono::Local;
use regex::Regex;

use envprobe::probe::platform::PlatformSource;
use envprobe::probe::report::{FACT_NAMES, render_report};
use envprobe::probe::{EnvironmentFacts, OsFamily, probe};

struct ScriptedPlatform {
    platform: &'static str,
    mac_product_version: Option<&'static str>,
    linux_distribution: Option<(&'static str, &'static str)>,
    home: (&'static str, &'static str),
}

impl PlatformSource for ScriptedPlatform {
    fn platform(&self) -> &str {
        self.platform
    }

    fn mac_product_version(&self) -> Option<String> {
        self.mac_product_version.map(str::to_string)
    }

    fn linux_distribution(&self) -> Option<(String, String)> {
        self.linux_distribution
            .map(|(name, version)| (name.to_string(), version.to_string()))
    }

    fn windows_caption(&self) -> Option<String> {
        None
    }

    fn hostname(&self) -> String {
        "ci-runner".to_string()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        (name == self.home.0).then(|| self.home.1.to_string())
    }
}

fn linux_facts() -> EnvironmentFacts {
    let source = ScriptedPlatform {
        platform: "linux",
        mac_product_version: None,
        linux_distribution: Some(("Debian GNU/Linux", "13")),
        home: ("HOME", "/home/ci"),
    };
    probe(&source).unwrap()
}

// =============================================================================
// Report Contract
// =============================================================================

#[test]
fn report_line_order_is_fixed() {
    let facts = linux_facts();
    let mut buffer = Vec::new();
    render_report(&mut buffer, &facts, Local::now()).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with(" ! Start envprobe: "));
    assert_eq!(lines[2], " < Platform / hostOS is 'Linux' >");
    assert_eq!(lines[3], " < Platform / hostOSCaption is 'Debian GNU/Linux 13' >");
    assert_eq!(lines[4], " < HOME is '/home/ci' >");
    assert_eq!(lines[5], "");
    assert!(lines[6].starts_with(" # envprobe "));
    assert!(lines[6].ends_with("on Debian GNU/Linux 13 - ci-runner #"));
    assert_eq!(lines[7], "");
    assert_eq!(
        lines[8],
        " Here are the persistent facts available to later scripts: ..."
    );
    for (offset, name) in FACT_NAMES.iter().enumerate() {
        assert_eq!(lines[9 + offset], format!("   {name}"));
    }
    assert_eq!(lines[16], "");
    assert!(lines[17].starts_with("End : "));
    assert_eq!(lines.len(), 18);
}

#[test]
fn report_timestamps_match_layout() {
    let facts = linux_facts();
    let mut buffer = Vec::new();
    render_report(&mut buffer, &facts, Local::now()).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let timestamp = Regex::new(r"\d{4} \d{2} \d{2} \d{2}:\d{2}:\d{2} \S+").unwrap();

    let stamped: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with(" ! Start") || line.starts_with("End :"))
        .collect();
    assert_eq!(stamped.len(), 2);
    for line in stamped {
        assert!(timestamp.is_match(line), "bad timestamp in {line:?}");
    }
}

#[test]
fn report_advertises_seven_facts() {
    assert_eq!(
        FACT_NAMES,
        [
            "HOME",
            "COMPUTERNAME",
            "hostOS",
            "hostOSCaption",
            "IsWindows",
            "IsLinux",
            "IsMacOS",
        ]
    );
}

// =============================================================================
// Probe Semantics Through the Public API
// =============================================================================

#[test]
fn macos_known_release_produces_caption() {
    let source = ScriptedPlatform {
        platform: "macos",
        mac_product_version: Some("10.15.7"),
        linux_distribution: None,
        home: ("HOME", "/Users/ci"),
    };

    let facts = probe(&source).unwrap();
    assert_eq!(facts.os_family, OsFamily::MacOs);
    assert_eq!(facts.os_caption, "Mac OS X 10.15 Catalina");
}

#[test]
fn macos_unknown_release_is_fatal() {
    let source = ScriptedPlatform {
        platform: "macos",
        mac_product_version: Some("10.9.5"),
        linux_distribution: None,
        home: ("HOME", "/Users/ci"),
    };

    assert!(probe(&source).is_err());
}

#[test]
fn empty_linux_caption_still_renders() {
    let source = ScriptedPlatform {
        platform: "linux",
        mac_product_version: None,
        linux_distribution: None,
        home: ("HOME", "/home/ci"),
    };

    let facts = probe(&source).unwrap();
    let mut buffer = Vec::new();
    render_report(&mut buffer, &facts, Local::now()).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains(" < Platform / hostOSCaption is '' >"));
}

// =============================================================================
// JSON Output
// =============================================================================

#[test]
fn facts_serialize_to_stable_json_shape() {
    let facts = linux_facts();
    let value: serde_json::Value = serde_json::to_value(&facts).unwrap();

    assert_eq!(value["os_family"], "Linux");
    assert_eq!(value["os_caption"], "Debian GNU/Linux 13");
    assert_eq!(value["computer_name"], "ci-runner");
    assert_eq!(value["home_directory"], "/home/ci");
    assert_eq!(value["is_admin"], false);
    assert_eq!(value["is_server"], false);
}
