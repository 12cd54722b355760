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

//! Application event loop.
//!
//! Every input reaches the application as an [`AppEvent`] on a single
//! channel: key presses, pastes and resizes from the terminal thread, and
//! ticks from the advance timer. Events are processed one at a time and each
//! runs to completion, so a timer tick can never interleave with a user
//! action and no locking is needed.
//!
//! After each event the timer is re-synchronised with the playback state and
//! the screen is redrawn.

pub(crate) mod handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, events::handlers::handle_event, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),

    /// A tick from the timer schedule with the given generation.
    Advance(u64),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
