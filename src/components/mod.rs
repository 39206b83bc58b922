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

//! Reusable view components.
//!
//! * [`SearchView`]: the search input and its results table.
//! * [`SelectedWinesView`]: the wines activated from the search results.
//! * [`WineTable`]: the table widget both views draw their wines with.

mod search;
mod selected;
mod wine_table;

pub(crate) use search::SearchView;
pub(crate) use selected::SelectedWinesView;
pub(crate) use wine_table::{WineClickDelegate, WineRow, WineTable};
