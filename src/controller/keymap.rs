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

//! Keyboard shortcut mapping.
//!
//! Two groups of bindings exist. Control chords stand in for on-screen
//! buttons and work everywhere, including while typing. Plain-key shortcuts
//! only apply when focus is on the stage; inside a text-entry field they are
//! left for the field to consume.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::{Action, Focus};

/// Maps a key press to an action for the given focus.
///
/// Returns `None` when the key has no binding, in which case a focused text
/// field receives it as ordinary input.
pub(crate) fn map_key(key: &KeyEvent, focus: Focus) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if let Some(action) = map_chord(key) {
        return Some(action);
    }

    if focus.is_text_entry() {
        // The command line handles its own keys, including Esc.
        return match (focus, key.code) {
            (Focus::Editor, KeyCode::Esc | KeyCode::Tab) => Some(Action::FocusStage),
            _ => None,
        };
    }

    map_stage_key(key)
}

fn map_chord(key: &KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) | (KeyCode::F(5), _) => Some(Action::Start),
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(Action::Clear),
        _ => None,
    }
}

fn map_stage_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    let action = match key.code {
        KeyCode::Char(' ') => Action::TogglePlay,
        KeyCode::Left => Action::Prev,
        KeyCode::Right => Action::Next,
        KeyCode::Char('f') | KeyCode::Char('F') => Action::ToggleFullscreen,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Faster,
        KeyCode::Char('-') | KeyCode::Char('_') => Action::Slower,
        KeyCode::Char('l') => Action::ToggleLoop,
        KeyCode::Char('t') => Action::ToggleLabel,
        KeyCode::Tab | KeyCode::Char('i') => Action::FocusEditor,
        KeyCode::Char(':') => Action::OpenCommandLine,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };

    Some(action)
}
