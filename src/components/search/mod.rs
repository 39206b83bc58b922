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

//! Wine search view.
//!
//! The search view owns the text input, the search state and the results
//! table. Every change of the input text either resets the view to idle (empty
//! text) or dispatches a fetch. Completed fetches are fed back through
//! [`SearchView::apply_results`] and [`SearchView::apply_failure`].
//!
//! Activating a row hands the wine to the [`WineClickDelegate`] supplied at
//! construction.

mod event;
mod render;

use ratatui::layout::Rect;
use tui_input::Input;

use crate::{
    components::{WineClickDelegate, WineTable},
    model::{
        WineEntry,
        search::{SearchRequest, SearchState},
    },
    tasks::SearchDispatcher,
};

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) state: SearchState,
    pub(crate) table: WineTable,
    dispatcher: Box<dyn SearchDispatcher>,
    on_wine_click: Box<dyn WineClickDelegate>,
    clear_area: Rect,
}

impl SearchView {
    pub(crate) fn new(
        state: SearchState,
        dispatcher: Box<dyn SearchDispatcher>,
        on_wine_click: Box<dyn WineClickDelegate>,
    ) -> Self {
        Self {
            input: Input::default(),
            state,
            table: WineTable::new(),
            dispatcher,
            on_wine_click,
            clear_area: Rect::default(),
        }
    }

    pub(crate) fn results(&self) -> &[WineEntry] {
        self.state.results()
    }

    /// Reacts to a new input text.
    ///
    /// An empty text resets to idle. Anything else dispatches a fetch, and the
    /// current results stay in place until a response is applied.
    pub(crate) fn on_query_changed(&mut self, text: &str) {
        if self.input.value() != text {
            self.input = Input::new(text.to_string());
        }

        match self.state.set_query(text) {
            Some(request) => self.dispatch(request),
            None => self.table.reset_selection(0),
        }
    }

    /// Resets to idle, clearing the input text and the results.
    pub(crate) fn on_cancel(&mut self) {
        self.input.reset();
        self.state.reset();
        self.table.reset_selection(0);
    }

    /// Hands the wine at `index` to the click delegate. Does nothing if there
    /// is no such row.
    pub(crate) fn activate_row(&mut self, index: usize) {
        if let Some(wine) = self.state.results().get(index) {
            self.table.select(index);
            self.on_wine_click.on_wine_click(wine);
        }
    }

    pub(crate) fn apply_results(&mut self, seq: u64, wines: Vec<WineEntry>) {
        if self.state.apply_results(seq, wines) {
            self.table.reset_selection(self.state.results().len());
        } else {
            tracing::debug!(seq, "Discarded stale search results");
        }
    }

    pub(crate) fn apply_failure(&mut self, seq: u64, message: String) {
        if !self.state.apply_failure(seq, message) {
            tracing::debug!(seq, "Discarded stale search failure");
        }
    }

    fn dispatch(&self, request: SearchRequest) {
        tracing::debug!(seq = request.seq, query = %request.query, "Dispatching search");
        self.dispatcher.dispatch(request);
    }
}
