// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Environment Probe.
//!
//! # Architecture
//!
//! ```text
//! probe(&dyn PlatformSource) -> EnvironmentFacts
//!
//!   platform()  --> OsFamily {Windows | MacOs | Linux}
//!        |               |
//!        |        Windows: USERPROFILE + ver caption
//!        |        MacOs:   5-char key -> release table (fail-fast)
//!        |        Linux:   /etc/os-release (best-effort, may be empty)
//!        v               |
//!   hostname() ----------+--> EnvironmentFacts (immutable)
//!                                  |
//!                          report::render_report
//! ```
//!
//! The probe is a pure function of its [`PlatformSource`], so tests
//! inject fakes instead of depending on the build host.

pub mod macos;
pub mod platform;
pub mod report;


use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, ProbeResult};
use crate::probe::platform::PlatformSource;

/// Closed OS classification used to branch detection logic.
///
/// Exactly one variant is selected per run, chosen once and never
/// mutated. Platform strings that are neither Windows nor macOS fall
/// through to `Linux`, preserving the default/else branch of the
/// detection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// Maps a platform identity string (as in `std::env::consts::OS`)
    /// onto the closed family enum.
    #[must_use]
    pub fn from_platform(identity: &str) -> Self {
        match identity {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            _ => Self::Linux,
        }
    }

    /// Human-readable family name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record of all detected host facts produced per run.
///
/// Computed once per invocation, held in memory only, discarded on
/// exit. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentFacts {
    /// Categorical OS classification.
    pub os_family: OsFamily,
    /// Human-readable OS name/version, e.g. `"Mac OS X 10.15 Catalina"`.
    pub os_caption: String,
    /// Host machine's network name.
    pub computer_name: String,
    /// Current user's home directory, from the platform's standard
    /// environment variable.
    pub home_directory: PathBuf,
    /// Elevated-privileges indicator. Elevation detection is not
    /// implemented; always `false`.
    pub is_admin: bool,
    /// Reserved placeholder, always `false`.
    pub is_server: bool,
}

impl EnvironmentFacts {
    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(self.os_family, OsFamily::Windows)
    }

    #[must_use]
    pub const fn is_macos(&self) -> bool {
        matches!(self.os_family, OsFamily::MacOs)
    }

    #[must_use]
    pub const fn is_linux(&self) -> bool {
        matches!(self.os_family, OsFamily::Linux)
    }
}

/// Home-directory environment variable for a family.
const fn home_var(family: OsFamily) -> &'static str {
    match family {
        OsFamily::Windows => "USERPROFILE",
        OsFamily::MacOs | OsFamily::Linux => "HOME",
    }
}

/// Inspects the platform once and produces the facts record.
///
/// # Errors
///
/// - [`ProbeError::UnsupportedMacVersion`] when the macOS product
///   version is not in the fixed release table.
/// - [`ProbeError::MissingEnvVar`] when the home-directory variable is
///   absent from the process environment.
///
/// The Linux distribution query never fails: an unreadable
/// `/etc/os-release` degrades to a partial or empty caption.
pub fn probe(source: &dyn PlatformSource) -> ProbeResult<EnvironmentFacts> {
    let identity = source.platform();
    let os_family = OsFamily::from_platform(identity);
    tracing::debug!(platform = identity, family = %os_family, "resolved platform identity");

    let os_caption = match os_family {
        OsFamily::Windows => source
            .windows_caption()
            .unwrap_or_else(|| "Windows".to_string()),
        OsFamily::MacOs => {
            let version = source.mac_product_version().unwrap_or_default();
            // Major.minor key, e.g. "10.15.7" -> "10.15"
            let key: String = version.chars().take(5).collect();
            let name =
                macos::release_name(&key).ok_or_else(|| ProbeError::UnsupportedMacVersion {
                    version: key.clone(),
                })?;
            format!("Mac OS X {key} {name}")
        }
        OsFamily::Linux => match source.linux_distribution() {
            Some((name, version)) => format!("{name} {version}").trim().to_string(),
            None => String::new(),
        },
    };

    let var = home_var(os_family);
    let home = source
        .env_var(var)
        .ok_or_else(|| ProbeError::MissingEnvVar {
            name: var.to_string(),
        })?;

    Ok(EnvironmentFacts {
        os_family,
        os_caption,
        computer_name: source.hostname(),
        home_directory: PathBuf::from(home),
        // Elevation detection is an unimplemented capability on every
        // family; is_server is reserved.
        is_admin: false,
        is_server: false,
    })
}
