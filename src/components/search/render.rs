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

//! UI rendering logic for the search view.
//!
//! The view is drawn as a bordered text input with a clear affordance,
//! above the table of results.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::{SearchView, WineRow},
    render::Render,
    theme::Theme,
};

const PLACEHOLDER: &str = "Search wines...";

const CLEAR_ICON: &str = " ✕ ";

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_input(f, chunks[0], theme);

        let rows = WineRow::build(self.state.results());
        self.table.draw(f, chunks[1], &rows, theme);
    }
}

impl SearchView {
    fn draw_input(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let container = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(CLEAR_ICON.chars().count() as u16)])
            .split(inner);

        let text_area = container[0];
        self.clear_area = container[1];

        if self.input.value().is_empty() {
            f.render_widget(
                Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted_fg)),
                text_area,
            );
        } else {
            let scroll = self.input.visual_scroll(text_area.width as usize);
            f.render_widget(
                Paragraph::new(self.input.value())
                    .style(Style::default().fg(theme.input_fg))
                    .scroll((0, scroll as u16)),
                text_area,
            );
        }

        // The clear affordance keeps its space while hidden so the input
        // does not shift when it appears.
        if self.state.has_active_query() {
            f.render_widget(
                Paragraph::new(CLEAR_ICON).style(Style::default().fg(theme.accent_colour)),
                self.clear_area,
            );
        }

        let scroll = self.input.visual_scroll(text_area.width as usize);
        let cursor_x = text_area.x + (self.input.visual_cursor().max(scroll) - scroll) as u16;
        f.set_cursor_position((cursor_x, text_area.y));
    }
}
