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

//! Render the playback controls.
//!
//! This module renders the control bar above the stage: the play/pause,
//! previous and next buttons, the advance interval, the loop and label
//! checkboxes, and the progress indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{CHECKED, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, UNCHECKED},
    util::format::{format_interval, format_progress},
};

/// Renders the control bar.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let playback = &app.playback;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner_area);

    // Buttons are disabled until there is something to play.
    let button_style = if playback.is_empty() {
        Style::default().fg(theme.disabled_colour)
    } else {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    };

    let play_button = if playback.is_playing() {
        format!("[{} Pause]", ICON_PAUSE)
    } else {
        format!("[{} Play]", ICON_PLAY)
    };

    let checkbox = |checked: bool| if checked { CHECKED } else { UNCHECKED };

    let controls = Line::from(vec![
        Span::styled(play_button, button_style),
        Span::raw(" "),
        Span::styled(format!("[{} Prev]", ICON_PREV), button_style),
        Span::raw(" "),
        Span::styled(format!("[{} Next]", ICON_NEXT), button_style),
        Span::raw("   Interval: ").fg(theme.muted_colour),
        Span::styled(
            format_interval(playback.interval_ms()),
            Style::default().fg(theme.text_colour),
        ),
        Span::raw("   ").fg(theme.muted_colour),
        Span::raw(checkbox(playback.looping())).fg(theme.text_colour),
        Span::raw(" Loop  ").fg(theme.muted_colour),
        Span::raw(checkbox(playback.show_label())).fg(theme.text_colour),
        Span::raw(" Label").fg(theme.muted_colour),
    ]);
    f.render_widget(Paragraph::new(controls), chunks[0]);

    let progress = match playback.progress() {
        Some((position, len)) => Line::from(vec![
            Span::raw("Progress: ").fg(theme.muted_colour),
            Span::styled(
                format_progress(position, len),
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::raw("Not started").fg(theme.muted_colour)),
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Right),
        chunks[1],
    );
}
