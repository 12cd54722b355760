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

//! Render the command-line interface.
//!
//! This module renders the bottom line of the screen: the `:` command line
//! while it is open, the error from the last rejected command, or otherwise a
//! summary of the keys that move focus and act as buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, controller::Focus};

const EDITOR_KEYS: &str = "Esc/Tab: done  Ctrl+S: start  Ctrl+L: clear  Ctrl+C: quit";
const STAGE_KEYS: &str = "Tab: edit list  Ctrl+S: start  Ctrl+L: clear  l: loop  t: label  :: command  q: quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = if commander.active() {
        Paragraph::new(format!(":{}", commander.input.value())).style(
            Style::default()
                .fg(app.theme.commander_colour)
                .bg(app.theme.commander_bg),
        )
    } else if let Some(status) = commander.status() {
        Paragraph::new(status).style(Style::default().fg(app.theme.error_colour))
    } else {
        let keys = if app.focus == Focus::Editor {
            EDITOR_KEYS
        } else {
            STAGE_KEYS
        };
        Paragraph::new(keys).style(Style::default().fg(app.theme.muted_colour))
    };

    f.render_widget(line, container[0]);

    if commander.active() {
        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
