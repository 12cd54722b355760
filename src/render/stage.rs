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

//! Render the stage.
//!
//! The stage shows the code for the current identifier, optionally followed
//! by the identifier text, and a hint line listing the shortcuts. Before a
//! list has been started it shows a prompt instead.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    App,
    controller::Focus,
    host::HostEnvironment,
    render::qr::{QrSymbol, QrWidget},
};

pub(crate) const HINT: &str = "Shortcuts: Space play/pause | \u{2190}/\u{2192} switch | F fullscreen | +/- speed";
pub(crate) const IDLE_PROMPT: &str = "Paste tracking numbers above, then press Ctrl+S to start";

pub(crate) fn draw_stage(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let playback = &app.playback;

    let border_colour = if app.focus == Focus::Stage && !app.host.is_fullscreen() {
        theme.focus_border_colour
    } else {
        theme.border_colour
    };

    let block = if app.host.is_fullscreen() {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    if playback.is_empty() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(inner);
        f.render_widget(
            Paragraph::new(IDLE_PROMPT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted_colour)),
            rows[1],
        );
        return;
    }

    let label_height = if playback.show_label() { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(label_height),
            Constraint::Length(1),
        ])
        .split(inner);

    let identifier = playback.current_identifier();
    let drawn = QrSymbol::encode(identifier, app.error_level).and_then(|symbol| {
        let widget = QrWidget::new(&symbol, app.presentation_size, app.host.cell_size(), theme);
        widget.scale(rows[0])?;
        f.render_widget(widget, rows[0]);
        Ok(())
    });

    if let Err(err) = drawn {
        f.render_widget(
            Paragraph::new(err.to_string())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(theme.error_colour)),
            rows[0],
        );
    }

    if playback.show_label() {
        f.render_widget(
            Paragraph::new(identifier)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.text_colour)
                        .add_modifier(Modifier::BOLD),
                ),
            rows[1],
        );
    }

    f.render_widget(
        Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted_colour)),
        rows[2],
    );
}
