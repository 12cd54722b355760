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

//! Application configuration.
//!
//! This module manages the application configuration file, which supplies
//! the initial playback settings. Command-line flags are layered on top by
//! [`crate::cli::Args::apply`]. The file is only ever read; nothing about a
//! session is written back.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    model::playback::{DEFAULT_INTERVAL_MS, Playback},
    render::qr::ErrorLevel,
};

const CONFIG_NAME: &str = "qrplay";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Time each code stays on screen, in milliseconds.
    pub(crate) interval_ms: i64,
    pub(crate) loop_playback: bool,
    pub(crate) show_label: bool,
    pub(crate) error_level: ErrorLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            interval_ms: DEFAULT_INTERVAL_MS as i64,
            loop_playback: true,
            show_label: true,
            error_level: ErrorLevel::default(),
        }
    }
}

impl AppConfig {
    /// An empty playback state machine using these settings.
    pub(crate) fn playback(&self) -> Playback {
        Playback::new(self.interval_ms, self.loop_playback, self.show_label)
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|err| {
        warn!(%err, "Unable to load configuration, using defaults");
        AppConfig::default()
    })
}
