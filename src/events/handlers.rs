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

//! Event handlers.
//!
//! Key presses are routed in order: control chords and stage shortcuts via
//! the keymap, then whichever text field has focus. Resulting actions are
//! applied through the controller, with focus and lifecycle actions handled
//! here.

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use tracing::{debug, trace};

use crate::{
    App,
    controller::{self, Action, Focus, keymap::map_key},
    events::AppEvent,
    host::HostEnvironment,
    model::sizing::compute_size,
};

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Paste(text) => handle_paste(app, text),
        AppEvent::Resize(columns, rows) => handle_resize(app, columns, rows),
        AppEvent::Advance(generation) => handle_advance(app, generation),
        AppEvent::ExitApplication => {}
    }

    app.timer.sync(&app.playback);

    Ok(())
}

fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if let Some(action) = map_key(&key, app.focus) {
        return handle_action(app, action);
    }

    let event = Event::Key(key);
    match app.focus {
        Focus::CommandLine => {
            let action = app.commander.handle_event(&event);
            if !app.commander.active() {
                set_focus(app, Focus::Stage);
            }
            if let Some(action) = action {
                handle_action(app, action)?;
            }
        }
        Focus::Editor => {
            app.editor.process_event(&event);
        }
        Focus::Stage => {}
    }

    Ok(())
}

/// Applies an action and re-synchronises the timer.
pub(crate) fn handle_action(app: &mut App, action: Action) -> Result<()> {
    match action {
        Action::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        Action::FocusEditor => focus_editor(app),
        Action::FocusStage => set_focus(app, Focus::Stage),
        Action::OpenCommandLine => {
            app.commander.open();
            set_focus(app, Focus::CommandLine);
        }
        Action::Clear => {
            app.editor.clear();
            controller::apply(action, &mut app.playback, app.host.as_mut(), "");
        }
        Action::Start => {
            controller::apply(action, &mut app.playback, app.host.as_mut(), app.editor.text());
            // Leave the editor so the playback shortcuts are live.
            if !app.playback.is_empty() && app.focus == Focus::Editor {
                set_focus(app, Focus::Stage);
            }
        }
        _ => controller::apply(action, &mut app.playback, app.host.as_mut(), ""),
    }

    app.timer.sync(&app.playback);

    Ok(())
}

fn set_focus(app: &mut App, focus: Focus) {
    app.focus = focus;
    app.editor.is_active = focus == Focus::Editor;
}

/// Moves focus into the editor, leaving fullscreen so it is visible.
fn focus_editor(app: &mut App) {
    if app.host.is_fullscreen() {
        let fullscreen = app.host.toggle_fullscreen();
        debug!(fullscreen, "Left fullscreen for editing");
    }
    set_focus(app, Focus::Editor);
}

fn handle_paste(app: &mut App, text: String) {
    if app.focus == Focus::CommandLine {
        return;
    }
    focus_editor(app);
    app.editor.process_event(&Event::Paste(text));
}

fn handle_resize(app: &mut App, columns: u16, rows: u16) {
    app.host.resized(columns, rows);
    app.presentation_size = compute_size(app.host.viewport());
}

fn handle_advance(app: &mut App, generation: u64) {
    if app.timer.is_current(generation) {
        app.playback.next();
        trace!(generation, position = app.playback.position(), "Advanced");
    } else {
        trace!(generation, "Dropped stale tick");
    }
}
