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

//! UI rendering for the tracking list editor.
//!
//! The editor is split in two: the raw text on the left, scrolled so the end
//! of the text stays visible, and the parse preview on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{TrackingInput, tracking_input::PREVIEW_LIMIT},
    theme::Theme,
};

impl TrackingInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(area);

        let editor_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Tracking numbers: newline, space, tab, comma or semicolon ")
            .padding(Padding::horizontal(1));
        let editor_area = editor_block.inner(chunks[0]);

        let lines: Vec<&str> = self.text().split('\n').collect();
        let visible = usize::from(editor_area.height).max(1);
        let first = lines.len().saturating_sub(visible);

        let text: Vec<Line> = if self.text().is_empty() && !self.is_active {
            vec![Line::styled(
                "Press Tab to edit, then paste the column",
                Style::default().fg(theme.muted_colour),
            )]
        } else {
            lines[first..]
                .iter()
                .map(|line| Line::raw(line.replace('\r', "")))
                .collect()
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(theme.text_colour))
                .block(editor_block),
            chunks[0],
        );

        if self.is_active {
            let last = lines.last().map(|line| line.replace('\r', "")).unwrap_or_default();
            let column = last
                .chars()
                .count()
                .min(usize::from(editor_area.width.saturating_sub(1)));
            let cursor_x = editor_area.x + column as u16;
            let cursor_y = editor_area.y + (lines.len() - first - 1) as u16;
            f.set_cursor_position((cursor_x, cursor_y));
        }

        self.draw_preview(f, chunks[1], theme);
    }

    fn draw_preview(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let parsed = self.parsed();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(Line::from(vec![
                Span::raw(" Recognised: "),
                Span::styled(
                    parsed.len().to_string(),
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" (first {}) ", PREVIEW_LIMIT)),
            ]))
            .padding(Padding::horizontal(1));

        let lines: Vec<Line> = if parsed.is_empty() {
            vec![Line::styled("(none)", Style::default().fg(theme.muted_colour))]
        } else {
            parsed
                .preview(PREVIEW_LIMIT)
                .iter()
                .enumerate()
                .map(|(i, id)| Line::raw(format!("{:02}. {}", i + 1, id)))
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(theme.text_colour))
                .block(block),
            area,
        );
    }
}
