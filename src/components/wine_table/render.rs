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

//! UI rendering logic for the wine table.
//!
//! This module handles the visual representation of wine rows, including
//! column layout, row highlighting and status colouring using the Ratatui
//! widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::{WineRow, WineTable},
    theme::Theme,
};

const COLUMN_SPACING: u16 = 1;

/// Splits `width` between description, name, country and status in a
/// 50/20/10/20 ratio. The description column takes the rounding remainder so
/// the columns always fill the row exactly.
fn column_widths(width: u16) -> [Constraint; 4] {
    let available = width.saturating_sub(3 * COLUMN_SPACING);
    let name = available / 5;
    let country = available / 10;
    let status = available / 5;
    let description = available - name - country - status;

    [
        Constraint::Length(description),
        Constraint::Length(name),
        Constraint::Length(country),
        Constraint::Length(status),
    ]
}

impl WineTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, rows: &[WineRow], theme: &Theme) {
        self.area = area;

        let rows = rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(Line::from(row.description).style(Style::default().fg(theme.table_description_fg))),
                Cell::from(Line::from(row.company_name).style(Style::default().fg(theme.table_company_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(row.country).style(Style::default().fg(theme.table_country_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(row.status).style(Style::default().fg(theme.status_colour(row.status))).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(rows, column_widths(area.width))
            .column_spacing(COLUMN_SPACING)
            .header(
                Row::new(vec![
                    Cell::from("Description"),
                    Cell::from(Line::from("Name").alignment(Alignment::Right)),
                    Cell::from(Line::from("Country").alignment(Alignment::Right)),
                    Cell::from(Line::from("Status").alignment(Alignment::Right)),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(theme.row_highlight_bg).fg(theme.row_highlight_fg))
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fill_the_width_exactly() {
        assert_eq!(
            column_widths(80),
            [
                Constraint::Length(40),
                Constraint::Length(15),
                Constraint::Length(7),
                Constraint::Length(15),
            ]
        );
        assert_eq!(column_widths(2), [Constraint::Length(0); 4]);
    }
}
