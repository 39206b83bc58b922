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

//! Keyboard and mouse input routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use crate::{App, events::AppEvent};

/// Maps keyboard input to application actions.
///
/// Application level shortcuts are checked first, everything else goes to the
/// search view, which owns the only text input.
///
/// * **Application Control**: `Ctrl-C` and `Ctrl-Q` exit the program.
/// * **Selection**: `Ctrl-D` clears the selected wines panel.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    app.search_view.process_event(&Event::Key(key));

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ClearSelectedWines)?;
        }

        _ => return Ok(false),
    }

    Ok(true)
}

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    app.search_view.process_event(&Event::Mouse(mouse));
}
