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

//! Status line rendering.
//!
//! Shows the last search failure when there is one, otherwise the result
//! count and key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &str = "Esc clear | ↑↓ move | Enter select | ^D clear selected | ^C quit";

pub(crate) fn status_text(app: &App) -> String {
    let state = &app.search_view.state;

    if let Some(error) = state.error() {
        return format!("Search failed: {error}");
    }

    if state.has_active_query() {
        format!("{} wines | {}", state.results().len(), KEY_HINTS)
    } else {
        KEY_HINTS.to_string()
    }
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let fg = if app.search_view.state.error().is_some() {
        app.theme.error_fg
    } else {
        app.theme.status_fg
    };

    f.render_widget(
        Paragraph::new(status_text(app)).style(Style::default().fg(fg).bg(app.theme.status_bg)),
        container[0],
    );
}
