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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod icons;
mod player;
pub(crate) mod qr;
mod stage;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    host::HostEnvironment,
    render::{commander::draw_commander, player::draw_player, stage::draw_stage},
};

/// Rows given to the tracking list editor.
const EDITOR_HEIGHT: u16 = 12;

/// Renders the user interface to the terminal frame.
///
/// In normal mode the screen is split into the tracking list editor, the
/// control bar, the stage and the command line. In fullscreen mode only the
/// stage is shown, plus the command line while it is in use.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    if app.host.is_fullscreen() {
        let command_height = if app.commander.active() { 1 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(command_height)])
            .split(area);

        draw_stage(f, outer[0], app);
        draw_commander(f, outer[1], app);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(EDITOR_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.editor.draw(f, outer[0], &app.theme);
    draw_player(f, outer[1], app);
    draw_stage(f, outer[2], app);
    draw_commander(f, outer[3], app);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        config::AppConfig,
        controller::Action,
        events::handlers::handle_action,
        host::fake::FakeHost,
        render::stage::{HINT, IDLE_PROMPT},
    };

    fn app_with(text: &str) -> App {
        App::new(
            AppConfig::default(),
            Box::new(FakeHost::with_viewport(1280, 800)),
            text.to_string(),
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn idle_screen() {
        let app = app_with("");

        let screen = render(&app, 120, 50);

        assert!(screen.contains(IDLE_PROMPT));
        assert!(screen.contains("Not started"));
        assert!(screen.contains("(none)"));
        assert!(!screen.contains("Progress"));
    }

    #[test]
    fn preview_lists_first_ten() {
        let raw: Vec<String> = (1..=12).map(|n| format!("ID{n}")).collect();
        let app = app_with(&raw.join(","));

        let screen = render(&app, 120, 50);

        assert!(screen.contains("Recognised: 12"));
        assert!(screen.contains("01. ID1"));
        assert!(screen.contains("10. ID10"));
        assert!(!screen.contains("11. ID11"));
    }

    #[test]
    fn very_long_line_keeps_cursor_in_editor() {
        let app = app_with(&"1".repeat(70_000));

        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 120 - 32);
        assert!(terminal.backend().buffer().area.contains(cursor));
    }

    #[test]
    fn playing_screen_shows_code_label_and_progress() {
        let mut app = app_with("100,200;300 400");
        handle_action(&mut app, Action::Start).unwrap();
        handle_action(&mut app, Action::Next).unwrap();

        let screen = render(&app, 120, 60);

        assert!(screen.contains("Progress: 2 / 4"));
        assert!(screen.contains("Pause"));
        assert!(screen.contains("200"));
        assert!(screen.contains(HINT));
        assert!(screen.contains('█'));
    }

    #[test]
    fn hidden_label_is_not_drawn() {
        let mut app = app_with("LABEL-ONE");
        handle_action(&mut app, Action::Start).unwrap();

        // Editor, preview and label.
        assert_eq!(render(&app, 120, 60).matches("LABEL-ONE").count(), 3);

        handle_action(&mut app, Action::SetShowLabel(false)).unwrap();

        assert_eq!(render(&app, 120, 60).matches("LABEL-ONE").count(), 2);
    }

    #[test]
    fn fullscreen_hides_editor_and_controls() {
        let mut app = app_with("ABC");
        handle_action(&mut app, Action::Start).unwrap();
        handle_action(&mut app, Action::ToggleFullscreen).unwrap();

        let screen = render(&app, 120, 60);

        assert!(!screen.contains("Recognised"));
        assert!(!screen.contains("Progress"));
        assert!(screen.contains('█'));
    }

    #[test]
    fn tiny_window_reports_instead_of_drawing() {
        let mut app = app_with("ABC");
        handle_action(&mut app, Action::Start).unwrap();
        handle_action(&mut app, Action::ToggleFullscreen).unwrap();

        let screen = render(&app, 20, 10);

        assert!(!screen.contains('█'));
        assert!(screen.contains("window"));
    }
}
