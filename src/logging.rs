// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The terminal is owned by the UI, so logs can only go to a file. Without
//! `--log-file` no subscriber is installed and events are discarded.
//!
//! # Log Levels
//!
//! - `warn`: rejected commands, unreadable configuration
//! - `info`: list started or cleared
//! - `debug`: play/pause, interval, fullscreen and timer changes
//! - `trace`: individual timer ticks

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub(crate) struct LogConfig {
    pub(crate) level: Level,
    pub(crate) log_file: Option<PathBuf>,
}

impl LogConfig {
    /// - 0 (no `-v`): info level
    /// - 1 (`-v`): debug level
    /// - 2+ (`-vv`): trace level
    pub(crate) fn from_verbosity(verbosity: u8, log_file: Option<PathBuf>) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, log_file }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity level when set.
pub(crate) fn init_logging(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(config.level).into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0, None).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(1, None).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5, None).level, Level::TRACE);
    }

    #[test]
    fn without_file_nothing_is_installed() {
        assert!(init_logging(&LogConfig::from_verbosity(2, None)).is_ok());
    }
}
