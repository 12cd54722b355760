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

//! Input controller.
//!
//! Translates discrete user input into [`Action`]s and applies them to the
//! playback state machine and host. This is the only place where playback
//! state is mutated in response to the user; the timer only ever advances.
//!
//! # Organization
//!
//! * [`keymap`]: Maps key presses to actions, honouring the current focus so
//!   shortcuts never fire while the user is typing.
//! * [`apply`]: Executes an action against the playback state and host.

pub(crate) mod keymap;

use tracing::{debug, info};

use crate::{
    host::HostEnvironment,
    model::playback::{INTERVAL_STEP_MS, Playback},
};

/// Where keyboard input is currently directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    /// The tracking list editor.
    Editor,
    /// The code display; plain-key shortcuts are live here.
    Stage,
    /// The `:` command line.
    CommandLine,
}

impl Focus {
    pub(crate) fn is_text_entry(self) -> bool {
        matches!(self, Focus::Editor | Focus::CommandLine)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Start,
    Clear,
    TogglePlay,
    Prev,
    Next,
    ToggleFullscreen,
    /// Shorten the interval by one step.
    Faster,
    /// Lengthen the interval by one step.
    Slower,
    SetInterval(i64),
    SetLoop(bool),
    SetShowLabel(bool),
    ToggleLoop,
    ToggleLabel,
    FocusEditor,
    FocusStage,
    OpenCommandLine,
    Quit,
}

/// Applies an action to the playback state and host.
///
/// `raw_text` is the current content of the tracking list editor, consumed by
/// [`Action::Start`]. Focus and lifecycle actions are handled by the caller
/// and are ignored here.
pub(crate) fn apply(
    action: Action,
    playback: &mut Playback,
    host: &mut dyn HostEnvironment,
    raw_text: &str,
) {
    match action {
        Action::Start => {
            playback.start(raw_text);
            info!(count = playback.len(), "Started playback");
        }
        Action::Clear => {
            playback.clear();
            info!("Cleared tracking list");
        }
        Action::TogglePlay => {
            playback.toggle_play();
            debug!(playing = playback.is_playing(), "Toggled playback");
        }
        Action::Prev => playback.prev(),
        Action::Next => playback.next(),
        Action::ToggleFullscreen => {
            let fullscreen = host.toggle_fullscreen();
            debug!(fullscreen, "Toggled fullscreen");
        }
        Action::Faster => adjust_interval(playback, -INTERVAL_STEP_MS),
        Action::Slower => adjust_interval(playback, INTERVAL_STEP_MS),
        Action::SetInterval(ms) => {
            playback.set_interval(ms);
            debug!(interval_ms = playback.interval_ms(), "Interval set");
        }
        Action::SetLoop(looping) => playback.set_loop(looping),
        Action::SetShowLabel(show) => playback.set_show_label(show),
        Action::ToggleLoop => playback.set_loop(!playback.looping()),
        Action::ToggleLabel => playback.set_show_label(!playback.show_label()),
        Action::FocusEditor | Action::FocusStage | Action::OpenCommandLine | Action::Quit => {}
    }
}

fn adjust_interval(playback: &mut Playback, delta: i64) {
    playback.adjust_interval(delta);
    debug!(interval_ms = playback.interval_ms(), "Interval adjusted");
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{keymap::map_key, *};
    use crate::host::fake::FakeHost;

    /// Presses a key on the stage and applies whatever it maps to.
    fn press(playback: &mut Playback, host: &mut FakeHost, raw: &str, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(action) = map_key(&key, Focus::Stage) {
            apply(action, playback, host, raw);
        }
    }

    #[test]
    fn paste_start_and_navigate() {
        let raw = "100,200;300 400";
        let mut playback = Playback::default();
        let mut host = FakeHost::default();

        apply(Action::Start, &mut playback, &mut host, raw);
        assert_eq!(playback.list().iter().collect::<Vec<_>>(), ["100", "200", "300", "400"]);
        assert_eq!(playback.position(), 0);
        assert!(playback.is_playing());

        press(&mut playback, &mut host, raw, KeyCode::Right);
        press(&mut playback, &mut host, raw, KeyCode::Right);
        assert_eq!(playback.position(), 2);
        assert_eq!(playback.current_identifier(), "300");

        press(&mut playback, &mut host, raw, KeyCode::Left);
        assert_eq!(playback.position(), 1);
        assert_eq!(playback.current_identifier(), "200");

        press(&mut playback, &mut host, raw, KeyCode::Right);
        assert_eq!(playback.position(), 2);

        apply(Action::SetLoop(false), &mut playback, &mut host, raw);
        press(&mut playback, &mut host, raw, KeyCode::Right);
        press(&mut playback, &mut host, raw, KeyCode::Right);
        assert_eq!(playback.position(), 3);
        assert_eq!(playback.current_identifier(), "400");
    }

    #[test]
    fn speed_keys_step_and_clamp() {
        let mut playback = Playback::new(300, true, true);
        let mut host = FakeHost::default();

        press(&mut playback, &mut host, "", KeyCode::Char('+'));
        assert_eq!(playback.interval_ms(), 200);
        press(&mut playback, &mut host, "", KeyCode::Char('='));
        assert_eq!(playback.interval_ms(), 150);
        press(&mut playback, &mut host, "", KeyCode::Char('+'));
        assert_eq!(playback.interval_ms(), 150);

        press(&mut playback, &mut host, "", KeyCode::Char('-'));
        assert_eq!(playback.interval_ms(), 250);
        press(&mut playback, &mut host, "", KeyCode::Char('_'));
        assert_eq!(playback.interval_ms(), 350);

        apply(Action::SetInterval(4950), &mut playback, &mut host, "");
        press(&mut playback, &mut host, "", KeyCode::Char('-'));
        assert_eq!(playback.interval_ms(), 5000);
    }

    #[test]
    fn play_controls_disabled_on_empty_list() {
        let mut playback = Playback::default();
        let mut host = FakeHost::default();
        let before = playback.clone();

        for code in [KeyCode::Char(' '), KeyCode::Left, KeyCode::Right] {
            press(&mut playback, &mut host, "", code);
        }

        assert_eq!(playback, before);
    }

    #[test]
    fn fullscreen_toggles_and_survives_refusal() {
        let mut playback = Playback::default();
        let mut host = FakeHost::default();

        press(&mut playback, &mut host, "", KeyCode::Char('f'));
        assert!(host.fullscreen);
        press(&mut playback, &mut host, "", KeyCode::Char('F'));
        assert!(!host.fullscreen);

        host.refuse_fullscreen = true;
        press(&mut playback, &mut host, "", KeyCode::Char('f'));
        assert!(!host.fullscreen);
    }

    #[test]
    fn loop_and_label_toggles() {
        let mut playback = Playback::default();
        let mut host = FakeHost::default();

        press(&mut playback, &mut host, "", KeyCode::Char('l'));
        press(&mut playback, &mut host, "", KeyCode::Char('t'));
        assert!(!playback.looping());
        assert!(!playback.show_label());

        apply(Action::SetShowLabel(true), &mut playback, &mut host, "");
        assert!(playback.show_label());
        assert!(!playback.looping());
    }
}
