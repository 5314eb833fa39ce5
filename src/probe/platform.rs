// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform query abstraction.
//!
//! ```text
//! PlatformSource (trait)
//!   platform()              std::env::consts::OS
//!   mac_product_version()   sw_vers -productVersion
//!   linux_distribution()    /etc/os-release NAME + VERSION_ID
//!   windows_caption()       cmd /C ver
//!   hostname()              gethostname
//!   env_var()               std::env::var
//!
//! HostPlatform = production impl; tests use fakes.
//! ```

use std::process::Command;

/// Raw platform queries consumed by the probe.
///
/// Everything the probe needs from the host goes through this trait,
/// so detection logic can be exercised against fake platforms without
/// caring what the build host actually runs.
pub trait PlatformSource {
    /// Platform identity string, e.g. `"windows"`, `"macos"`, `"linux"`.
    fn platform(&self) -> &str;

    /// macOS product version, e.g. `"10.15.7"`. `None` when the query
    /// fails or the platform has no such notion.
    fn mac_product_version(&self) -> Option<String>;

    /// Best-effort distribution name and version. The version may be
    /// empty when the release file carries no `VERSION_ID`.
    fn linux_distribution(&self) -> Option<(String, String)>;

    /// Best-effort Windows version caption.
    fn windows_caption(&self) -> Option<String>;

    /// Host machine's network name.
    fn hostname(&self) -> String;

    /// Reads a variable from the process environment.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// The running host, queried through the real platform APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformSource for HostPlatform {
    fn platform(&self) -> &str {
        std::env::consts::OS
    }

    fn mac_product_version(&self) -> Option<String> {
        let output = Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn linux_distribution(&self) -> Option<(String, String)> {
        let contents = std::fs::read_to_string("/etc/os-release").ok()?;
        parse_os_release(&contents)
    }

    fn windows_caption(&self) -> Option<String> {
        let output = Command::new("cmd").args(["/C", "ver"]).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let caption = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if caption.is_empty() { None } else { Some(caption) }
    }

    fn hostname(&self) -> String {
        gethostname::gethostname().to_string_lossy().into_owned()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Extracts `NAME` and `VERSION_ID` from os-release contents.
///
/// Returns `None` when no `NAME` field is present; a missing
/// `VERSION_ID` yields an empty version instead.
pub(crate) fn parse_os_release(contents: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut version = None;

    for line in contents.lines() {
        if let Some(value) = line.strip_prefix("NAME=") {
            name = Some(value.trim_matches('"').to_string());
        } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
            version = Some(value.trim_matches('"').to_string());
        }
    }

    name.map(|name| (name, version.unwrap_or_default()))
}
