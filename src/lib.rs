// envprobe: Host Environment Probe
//
// SPDX-FileCopyrightText: 2026 envprobe contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                   main.rs
//!                      |
//!           +----------+----------+
//!           v                     v
//!        cli (clap)          cmd (handlers)
//!           |                 probe / version
//!           +----------+----------+
//!                      v
//!         ,-------------------------,
//!         |          probe          |
//!         |  PlatformSource (trait) |
//!         |  EnvironmentFacts       |
//!         |  macos table / report   |
//!         '-------------------------'
//!
//!   +--------------------------------------+
//!   |  foundation     error, logging       |
//!   +--------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod error;
pub mod logging;
pub mod probe;
