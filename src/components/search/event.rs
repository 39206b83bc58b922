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

//! Input handling for the search view.
//!
//! This module maps terminal keyboard and mouse events to the search view
//! operations. Text editing keys are delegated to the managed input
//! component, everything else drives the results table.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchView, WineRow};

impl SearchView {
    /// Processes a terminal event, returning whether it was consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                let len = self.results().len();
                match key_event.code {
                    KeyCode::Esc => self.on_cancel(),
                    KeyCode::Down => self.table.goto_next(len),
                    KeyCode::Up => self.table.goto_previous(len),
                    KeyCode::Enter => {
                        if let Some(index) = self.table.selected() {
                            self.activate_row(index);
                        }
                    }

                    _ => {
                        // Delegate all other key events to the managed input
                        // component.
                        let changed = self.input.handle_event(event).is_some_and(|c| c.value);
                        if !changed {
                            return false;
                        }
                        let text = self.input.value().to_string();
                        self.on_query_changed(&text);
                    }
                }

                true
            }

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let (column, row) = (mouse_event.column, mouse_event.row);

                    if self.state.has_active_query() && self.clear_area.contains(Position::new(column, row)) {
                        self.on_cancel();
                        return true;
                    }

                    let rows = WineRow::build(self.state.results());
                    match self.table.row_at(column, row, &rows) {
                        Some(index) => {
                            self.activate_row(index);
                            true
                        }
                        None => false,
                    }
                }

                MouseEventKind::ScrollDown => {
                    let len = self.results().len();
                    self.table.goto_next(len);
                    true
                }
                MouseEventKind::ScrollUp => {
                    let len = self.results().len();
                    self.table.goto_previous(len);
                    true
                }

                _ => false,
            },

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    use crate::{
        components::search::tests::{source, view_with},
        model::search::StalePolicy,
    };

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn typing_dispatches_a_search_per_keystroke() {
        let (mut view, dispatcher, _) = view_with(StalePolicy::Discard);

        assert!(view.process_event(&key(KeyCode::Char('r'))));
        assert!(view.process_event(&key(KeyCode::Char('e'))));

        let queries: Vec<String> = dispatcher.0.borrow().iter().map(|r| r.query.clone()).collect();
        assert_eq!(queries, vec!["r".to_string(), "re".to_string()]);
    }

    #[test]
    fn deleting_last_character_returns_to_idle() {
        let (mut view, dispatcher, _) = view_with(StalePolicy::Discard);
        view.process_event(&key(KeyCode::Char('r')));
        let seq = dispatcher.0.borrow()[0].seq;
        view.apply_results(seq, source(3));

        view.process_event(&key(KeyCode::Backspace));

        assert_eq!(dispatcher.0.borrow().len(), 1);
        assert!(view.results().is_empty());
        assert!(!view.state.has_active_query());
    }

    #[test]
    fn escape_cancels() {
        let (mut view, _, _) = view_with(StalePolicy::Discard);
        view.process_event(&key(KeyCode::Char('r')));

        view.process_event(&key(KeyCode::Esc));

        assert_eq!(view.state.query(), "");
        assert_eq!(view.input.value(), "");
    }

    #[test]
    fn enter_activates_highlighted_row() {
        let (mut view, dispatcher, delegate) = view_with(StalePolicy::Discard);
        view.process_event(&key(KeyCode::Char('a')));
        let seq = dispatcher.0.borrow()[0].seq;
        view.apply_results(seq, source(5));

        view.process_event(&key(KeyCode::Down));
        view.process_event(&key(KeyCode::Down));
        view.process_event(&key(KeyCode::Enter));

        let clicked = delegate.0.borrow();
        assert_eq!(clicked.len(), 1);
        assert_eq!(clicked[0].description, "Red 2");
    }

    #[test]
    fn enter_without_results_does_nothing() {
        let (mut view, _, delegate) = view_with(StalePolicy::Discard);

        view.process_event(&key(KeyCode::Enter));

        assert!(delegate.0.borrow().is_empty());
    }

    #[test]
    fn click_outside_any_row_is_not_consumed() {
        let (mut view, _, delegate) = view_with(StalePolicy::Discard);

        assert!(!view.process_event(&click(3, 3)));
        assert!(delegate.0.borrow().is_empty());
    }
}
