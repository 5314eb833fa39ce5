// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed macOS release table.
//!
//! Six known releases, keyed by the major.minor product version. A key
//! outside the table is an [`UnsupportedMacVersion`] error at the call
//! site, never a silently guessed caption.
//!
//! [`UnsupportedMacVersion`]: crate::error::ProbeError::UnsupportedMacVersion

/// Release code names keyed by major.minor product version.
const RELEASE_NAMES: [(&str, &str); 6] = [
    ("10.15", "Catalina"),
    ("10.14", "Mojave"),
    ("10.13", "High Sierra"),
    ("10.12", "Sierra"),
    ("10.11", "El Capitan"),
    ("10.10", "Yosemite"),
];

/// Looks up the code name for a major.minor version key.
#[must_use]
pub fn release_name(key: &str) -> Option<&'static str> {
    RELEASE_NAMES
        .iter()
        .find(|(version, _)| *version == key)
        .map(|(_, name)| *name)
}
