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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line, handling a text input
//! component and translating a submitted command into a controller
//! [`Action`]. It gives keyboard access to every control, including direct
//! entry of an arbitrary advance interval.
//!
//! | Command            | Action                          |
//! |--------------------|---------------------------------|
//! | `start`, `s`       | parse the editor and play       |
//! | `clear`, `c`       | clear the list and editor       |
//! | `play`, `p`        | play / pause                    |
//! | `prev`, `pp`       | previous code                   |
//! | `next`, `pn`       | next code                       |
//! | `interval <ms>`    | set the advance interval        |
//! | `loop [on\|off]`   | set or toggle looping           |
//! | `label [on\|off]`  | set or toggle the text label    |
//! | `fs`               | toggle fullscreen               |
//! | `q`                | quit                            |

use crossterm::event::{Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::warn;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::controller::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs a value")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a whole number of milliseconds")]
    InvalidNumber(String),

    #[error("expected `on` or `off`, got `{0}`")]
    InvalidToggle(String),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    status: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            status: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// The outcome of the last submitted command, if it failed.
    pub(crate) fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn open(&mut self) {
        self.active = true;
        self.status = None;
        self.input.reset();
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }

    /// Feeds an event to the command line while it is open.
    ///
    /// Returns the action of a successfully submitted command. The command
    /// line closes itself on `Esc` and after every submission.
    pub(crate) fn handle_event(&mut self, event: &Event) -> Option<Action> {
        if !self.active {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.close();
                None
            }

            KeyCode::Enter => {
                let result = parse_command(self.input.value());
                self.close();
                match result {
                    Ok(action) => action,
                    Err(err) => {
                        warn!(%err, "Rejected command");
                        self.status = Some(err.to_string());
                        None
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

/// Parses a command line into an action.
///
/// An empty line is not an error and yields no action.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Action>, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let action = match parts.as_slice() {
        [] => return Ok(None),

        ["start" | "s"] => Action::Start,
        ["clear" | "c"] => Action::Clear,
        ["play" | "p"] => Action::TogglePlay,
        ["prev" | "pp"] => Action::Prev,
        ["next" | "pn"] => Action::Next,
        ["fs"] => Action::ToggleFullscreen,
        ["q"] => Action::Quit,

        ["interval" | "i"] => return Err(CommandError::MissingArgument("interval")),
        ["interval" | "i", ms] => Action::SetInterval(parse_millis(ms)?),

        ["loop"] => Action::ToggleLoop,
        ["loop", value] => Action::SetLoop(parse_toggle(value)?),

        ["label"] => Action::ToggleLabel,
        ["label", value] => Action::SetShowLabel(parse_toggle(value)?),

        [cmd, ..] => return Err(CommandError::Unknown(cmd.to_string())),
    };

    Ok(Some(action))
}

fn parse_millis(value: &str) -> Result<i64, CommandError> {
    // Values beyond i64 still mean "as slow as possible" once clamped.
    value
        .parse::<i128>()
        .map(|ms| ms.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn parse_toggle(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidToggle(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn type_line(commander: &mut Commander, line: &str) -> Option<Action> {
        for c in line.chars() {
            commander.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        commander.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
    }

    #[test]
    fn playback_commands() {
        assert_eq!(parse_command("start"), Ok(Some(Action::Start)));
        assert_eq!(parse_command(" clear "), Ok(Some(Action::Clear)));
        assert_eq!(parse_command("p"), Ok(Some(Action::TogglePlay)));
        assert_eq!(parse_command("pp"), Ok(Some(Action::Prev)));
        assert_eq!(parse_command("next"), Ok(Some(Action::Next)));
        assert_eq!(parse_command("fs"), Ok(Some(Action::ToggleFullscreen)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn interval_accepts_any_integer() {
        assert_eq!(parse_command("interval 1200"), Ok(Some(Action::SetInterval(1200))));
        assert_eq!(parse_command("i -5"), Ok(Some(Action::SetInterval(-5))));
        assert_eq!(
            parse_command("interval 99999999999999999999999"),
            Ok(Some(Action::SetInterval(i64::MAX)))
        );
        assert_eq!(
            parse_command("interval fast"),
            Err(CommandError::InvalidNumber("fast".into()))
        );
        assert_eq!(
            parse_command("interval"),
            Err(CommandError::MissingArgument("interval"))
        );
    }

    #[test]
    fn toggles() {
        assert_eq!(parse_command("loop"), Ok(Some(Action::ToggleLoop)));
        assert_eq!(parse_command("loop OFF"), Ok(Some(Action::SetLoop(false))));
        assert_eq!(parse_command("label on"), Ok(Some(Action::SetShowLabel(true))));
        assert_eq!(
            parse_command("label maybe"),
            Err(CommandError::InvalidToggle("maybe".into()))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("shuffle now"),
            Err(CommandError::Unknown("shuffle".into()))
        );
    }

    #[test]
    fn closed_commander_ignores_input() {
        let mut commander = Commander::new();

        assert_eq!(type_line(&mut commander, "q"), None);
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn submit_returns_action_and_closes() {
        let mut commander = Commander::new();
        commander.open();

        assert_eq!(type_line(&mut commander, "interval 300"), Some(Action::SetInterval(300)));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn failed_command_sets_status() {
        let mut commander = Commander::new();
        commander.open();

        assert_eq!(type_line(&mut commander, "bogus"), None);
        assert!(!commander.active());
        assert_eq!(commander.status(), Some("unknown command `bogus`"));

        commander.open();
        assert_eq!(commander.status(), None);
    }

    #[test]
    fn escape_cancels() {
        let mut commander = Commander::new();
        commander.open();
        type_line(&mut commander, "");
        commander.open();
        commander.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));

        commander.handle_event(&Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }
}
