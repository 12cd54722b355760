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

//! Terminal implementation of the host environment.
//!
//! Pixel dimensions are taken from the terminal when it reports them (via
//! `TIOCGWINSZ` on most Unix terminals). Otherwise they are estimated from the
//! cell grid using a nominal cell size. Fullscreen maps onto presentation
//! mode: the application hides its input panels and gives the whole screen
//! to the code.
//!
//! The module also owns the OSC escape sequences used to paint the terminal
//! background so that the window matches the theme outside the drawn area.

use std::io::{self, Write};

use crossterm::terminal;
use tracing::{debug, warn};

use crate::{
    host::{CellSize, HostEnvironment},
    model::sizing::ViewportSize,
};

pub(crate) struct TerminalHost {
    viewport: ViewportSize,
    cell_size: CellSize,
    fullscreen: bool,
}

impl TerminalHost {
    pub(crate) fn new() -> Self {
        let mut host = Self {
            viewport: ViewportSize::default(),
            cell_size: CellSize::default(),
            fullscreen: false,
        };

        match terminal::size() {
            Ok((columns, rows)) => host.resized(columns, rows),
            Err(err) => warn!(%err, "Unable to query terminal size"),
        }

        host
    }

    /// Sets the terminal background colour using an OSC 11 escape sequence.
    ///
    /// `hex_colour` is a CSS-style colour such as `"#1e1e1e"`.
    pub(crate) fn paint_background(hex_colour: &str) {
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]11;{}\x07", hex_colour)
            .and_then(|_| stdout.flush())
            .ok();
    }

    /// Reverts the terminal background to the user's own (OSC 111).
    pub(crate) fn reset_background() {
        let mut stdout = io::stdout();
        write!(stdout, "\x1b]111\x07")
            .and_then(|_| stdout.flush())
            .ok();
    }
}

impl HostEnvironment for TerminalHost {
    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    fn resized(&mut self, columns: u16, rows: u16) {
        let (columns, rows) = (u32::from(columns), u32::from(rows));

        // Terminals that do not know their pixel size report zero.
        let reported = terminal::window_size()
            .ok()
            .filter(|size| size.width > 0 && size.height > 0 && columns > 0 && rows > 0);

        self.cell_size = match reported {
            Some(size) => CellSize {
                width: (u32::from(size.width) / columns).max(1),
                height: (u32::from(size.height) / rows).max(1),
            },
            None => CellSize::default(),
        };

        self.viewport = ViewportSize::new(
            columns * self.cell_size.width,
            rows * self.cell_size.height,
        );

        debug!(viewport = ?self.viewport, cell_size = ?self.cell_size, "Viewport changed");
    }

    fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}
