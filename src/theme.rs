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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette, including the
//! colours used to tell the vegan status of a producer at a glance.

use ratatui::style::Color;

const STATUS_VEGAN: &str = "Vegan Friendly";
const STATUS_SOME_VEGAN: &str = "Has Some Vegan Options";

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) input_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) status_fg: Color,
    pub(crate) status_bg: Color,

    pub(crate) row_highlight_fg: Color,
    pub(crate) row_highlight_bg: Color,

    pub(crate) table_description_fg: Color,
    pub(crate) table_company_fg: Color,
    pub(crate) table_country_fg: Color,

    pub(crate) vegan_fg: Color,
    pub(crate) some_vegan_fg: Color,
    pub(crate) other_status_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(214, 93, 120),
            border_colour: Color::Rgb(102, 102, 102),
            muted_fg: Color::Rgb(128, 128, 128),
            input_fg: Color::Rgb(255, 255, 255),
            error_fg: Color::Rgb(255, 95, 95),

            status_fg: Color::Rgb(200, 200, 200),
            status_bg: Color::Rgb(60, 20, 35),

            row_highlight_fg: Color::White,
            row_highlight_bg: Color::Rgb(110, 30, 60),

            table_description_fg: Color::Rgb(255, 255, 255),
            table_company_fg: Color::Rgb(179, 157, 219),
            table_country_fg: Color::Rgb(162, 161, 166),

            vegan_fg: Color::Rgb(135, 215, 95),
            some_vegan_fg: Color::Rgb(250, 189, 47),
            other_status_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Picks the colour for a producer status as published in the wine list.
    pub(crate) fn status_colour(&self, status: &str) -> Color {
        match status {
            STATUS_VEGAN => self.vegan_fg,
            STATUS_SOME_VEGAN => self.some_vegan_fg,
            _ => self.other_status_fg,
        }
    }
}
