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

//! Application event loop and event dispatching.
//!
//! This module is the "Controller" of the application. Terminal input, ticks
//! and fetch outcomes all arrive as [`AppEvent`]s on a single channel and
//! are applied to the [`App`] state on the main thread.
//!
//! The UI is redrawn after every processed event, there is no other
//! mechanism for propagating state changes to the screen.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, components::WineClickDelegate, model::WineEntry, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    SearchResultsReady { seq: u64, wines: Vec<WineEntry> },
    SearchFailed { seq: u64, message: String },

    WineClicked(WineEntry),
    ClearSelectedWines,

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
        AppEvent::SearchResultsReady { seq, wines } => handle_search_results_ready(app, seq, wines),
        AppEvent::SearchFailed { seq, message } => handle_search_failed(app, seq, message),
        AppEvent::WineClicked(wine) => handle_wine_clicked(app, wine),
        AppEvent::ClearSelectedWines => handle_clear_selected_wines(app),
        AppEvent::Resize | AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

impl WineClickDelegate for Sender<AppEvent> {
    fn on_wine_click(&self, wine: &WineEntry) {
        // Only fails once the event loop has gone, nothing left to notify.
        let _ = self.send(AppEvent::WineClicked(wine.clone()));
    }
}
