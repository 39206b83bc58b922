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

//! Domain models and core data structures.
//!
//! This module defines the wine entries served by the remote data source, and
//! the search state that the search view keeps about them.

pub(crate) mod search;

use serde::Deserialize;

/// One record of the remote wine list.
///
/// Entries are taken verbatim from the fetched JSON array, no validation or
/// normalisation is applied. Any additional fields present in the source are
/// ignored.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct WineEntry {
    pub description: String,
    pub company_name: String,
    pub country: String,
    pub status: String,
}

#[cfg(test)]
impl WineEntry {
    pub(crate) fn sample(n: usize) -> Self {
        Self {
            description: format!("Red {n}"),
            company_name: format!("Company {n}"),
            country: "FR".to_string(),
            status: "Vegan Friendly".to_string(),
        }
    }
}
