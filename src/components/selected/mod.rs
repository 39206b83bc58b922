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

//! Selected wines panel.
//!
//! Collects the wines the user activated in the search view, in activation
//! order. The same wine may be selected more than once.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{WineRow, WineTable},
    model::WineEntry,
    render::Render,
    theme::Theme,
};

pub(crate) struct SelectedWinesView {
    wines: Vec<WineEntry>,
    table: WineTable,
}

impl SelectedWinesView {
    pub(crate) fn new() -> Self {
        Self {
            wines: vec![],
            table: WineTable::new(),
        }
    }

    pub(crate) fn wines(&self) -> &[WineEntry] {
        &self.wines
    }

    pub(crate) fn add_wine(&mut self, wine: WineEntry) {
        self.wines.push(wine);
        self.table.select(self.wines.len() - 1);
    }

    pub(crate) fn clear(&mut self) {
        self.wines.clear();
        self.table.reset_selection(0);
    }
}

impl Render for SelectedWinesView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(format!("Selected | {} wines", self.wines().len())).block(header_block);

        f.render_widget(header, chunks[0]);

        let rows = WineRow::build(&self.wines);
        self.table.draw(f, chunks[1], &rows, theme);
    }
}
