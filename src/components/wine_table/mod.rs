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

//! Interactive wine table widget and state management.
//!
//! This module provides the table used to list wines. The table only keeps
//! view state (highlighted row, scroll offset, where it was last drawn); the
//! wines themselves are owned by the caller and passed in as row descriptors
//! when drawing. Row activation is reported through a delegate so the table
//! stays decoupled from the application logic.

mod render;

use ratatui::{
    layout::{Position, Rect},
    widgets::TableState,
};

use crate::model::WineEntry;

/// Rows taken by the column header and the margin beneath it.
const HEADER_HEIGHT: u16 = 2;

/// Receives the wine of a row the user activated.
pub(crate) trait WineClickDelegate {
    fn on_wine_click(&self, wine: &WineEntry);
}

/// Display descriptor for one table row.
///
/// `index` is the position of the wine in the list the rows were built from,
/// and is what activation refers back to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct WineRow<'a> {
    pub(crate) index: usize,
    pub(crate) description: &'a str,
    pub(crate) company_name: &'a str,
    pub(crate) country: &'a str,
    pub(crate) status: &'a str,
}

impl<'a> WineRow<'a> {
    pub(crate) fn build(wines: &'a [WineEntry]) -> Vec<Self> {
        wines
            .iter()
            .enumerate()
            .map(|(index, wine)| Self {
                index,
                description: &wine.description,
                company_name: &wine.company_name,
                country: &wine.country,
                status: &wine.status,
            })
            .collect()
    }
}

pub(crate) struct WineTable {
    table_state: TableState,
    area: Rect,
}

impl WineTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            area: Rect::default(),
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Highlights the first row, or nothing when there are no rows.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        self.table_state = TableState::new();
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn select(&mut self, index: usize) {
        self.table_state.select(Some(index));
    }

    /// Maps a terminal cell to the wine index of the row drawn there, using
    /// the area and scroll offset of the last draw.
    pub(crate) fn row_at(&self, column: u16, row: u16, rows: &[WineRow]) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }

        let body_top = self.area.y.saturating_add(HEADER_HEIGHT);
        if row < body_top {
            return None;
        }

        let position = self.table_state.offset() + usize::from(row - body_top);
        rows.get(position).map(|r| r.index)
    }
}
