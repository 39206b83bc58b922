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

//! Handlers for non-input application events.

use crate::{App, model::WineEntry};

pub(super) fn handle_search_results_ready(app: &mut App, seq: u64, wines: Vec<WineEntry>) {
    tracing::debug!(seq, count = wines.len(), query = app.search_view.state.query(), "Search results ready");
    app.search_view.apply_results(seq, wines);
}

pub(super) fn handle_search_failed(app: &mut App, seq: u64, message: String) {
    app.search_view.apply_failure(seq, message);
}

pub(super) fn handle_wine_clicked(app: &mut App, wine: WineEntry) {
    let description = wine.description.clone();
    app.selected_view.add_wine(wine);
    tracing::info!(%description, selected = app.selected_view.wines().len(), "Wine selected");
}

pub(super) fn handle_clear_selected_wines(app: &mut App) {
    app.selected_view.clear();
}
