// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        ProbeError
//!            |
//!   +--------+--------+
//!   v        v        v
//! UnsupportedMacVersion
//!      MissingEnvVar   Io
//!
//! Both detection failures are fatal: the probe has no
//! recovery path and no supervising component.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ProbeError`].
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Top-level probe error type.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The macOS product version is not in the fixed release table.
    ///
    /// There is deliberately no fallback name: an unknown release fails
    /// fast instead of guessing a caption.
    #[error("unrecognized macOS version '{version}': not in the release table")]
    UnsupportedMacVersion { version: String },

    /// A required environment variable is absent from the process
    /// environment.
    #[error("required environment variable '{name}' is not set")]
    MissingEnvVar { name: String },

    /// I/O error while writing the report.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
