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

//! Input handling for the tracking list editor.
//!
//! Printable keys are appended, `Enter` starts a new line and bracketed
//! pastes are inserted verbatim. Keys with `Ctrl` or `Alt` held are left for
//! the controller.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::components::TrackingInput;

impl TrackingInput {
    /// Applies an editing event, returning whether it was consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        if !self.is_active {
            return false;
        }

        match event {
            Event::Paste(pasted) => {
                self.edit(|text| text.push_str(pasted));
                true
            }

            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    return false;
                }

                match key.code {
                    KeyCode::Char(c) => self.edit(|text| text.push(c)),
                    KeyCode::Enter => self.edit(|text| text.push('\n')),
                    KeyCode::Backspace => self.edit(|text| {
                        text.pop();
                    }),
                    _ => return false,
                }
                true
            }

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn active() -> TrackingInput {
        let mut input = TrackingInput::default();
        input.is_active = true;
        input
    }

    #[test]
    fn typing_updates_preview() {
        let mut input = active();

        for event in [
            key(KeyCode::Char('1')),
            key(KeyCode::Char('2')),
            key(KeyCode::Enter),
            key(KeyCode::Char('3')),
        ] {
            assert!(input.process_event(&event));
        }

        assert_eq!(input.text(), "12\n3");
        assert_eq!(input.parsed().iter().collect::<Vec<_>>(), ["12", "3"]);
    }

    #[test]
    fn paste_and_backspace() {
        let mut input = active();

        input.process_event(&Event::Paste("A1\tA2\r\nA3".into()));
        input.process_event(&key(KeyCode::Backspace));

        assert_eq!(input.text(), "A1\tA2\r\nA");
        assert_eq!(input.parsed().len(), 3);
    }

    #[test]
    fn shortcut_characters_are_plain_text() {
        let mut input = active();

        for c in [' ', 'f', '+', '-'] {
            assert!(input.process_event(&key(KeyCode::Char(c))));
        }

        assert_eq!(input.text(), " f+-");
    }

    #[test]
    fn inactive_editor_ignores_input() {
        let mut input = TrackingInput::default();

        assert!(!input.process_event(&key(KeyCode::Char('x'))));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn control_chords_are_not_consumed() {
        let mut input = active();
        let chord = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert!(!input.process_event(&chord));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn clear_empties_text_and_preview() {
        let mut input = TrackingInput::new("1 2 3".into());

        input.clear();

        assert_eq!(input.text(), "");
        assert!(input.parsed().is_empty());
    }
}
