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

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{config::AppConfig, render::qr::ErrorLevel};

/// Present a pasted list of tracking numbers as a timed QR code slideshow.
#[derive(Debug, Parser)]
#[command(name = "qrplay", version, about)]
pub(crate) struct Args {
    /// Time each code stays on screen, in milliseconds (150-5000).
    #[arg(short, long, value_name = "MS", allow_negative_numbers = true)]
    pub(crate) interval: Option<i64>,

    /// Stop on the last code instead of starting over.
    #[arg(long)]
    pub(crate) no_loop: bool,

    /// Do not show the tracking number below the code.
    #[arg(long)]
    pub(crate) hide_label: bool,

    /// QR error-correction level.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub(crate) level: Option<ErrorLevel>,

    /// Pre-fill the tracking list from a file.
    #[arg(long, value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,
}

impl Args {
    /// Overrides configuration values with those given on the command line.
    pub(crate) fn apply(&self, config: &mut AppConfig) {
        if let Some(interval) = self.interval {
            config.interval_ms = interval;
        }
        if self.no_loop {
            config.loop_playback = false;
        }
        if self.hide_label {
            config.show_label = false;
        }
        if let Some(level) = self.level {
            config.error_level = level;
        }
    }
}
