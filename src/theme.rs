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

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) clock_colour: Color,
    pub(crate) label_colour: Color,
    pub(crate) cell_colour: Color,

    pub(crate) blue_colour: Color,
    pub(crate) green_colour: Color,
    pub(crate) green_winner_colour: Color,

    pub(crate) warning_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg_colour: Color,
}

impl Default for Theme {
    // Returns the standard scoreboard theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme, black board with red clock.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(0, 0, 0),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(255, 255, 255),
            clock_colour: Color::Rgb(255, 0, 0),
            label_colour: Color::Rgb(255, 224, 0),
            cell_colour: Color::Rgb(34, 34, 34),

            blue_colour: Color::Rgb(25, 118, 210),
            green_colour: Color::Rgb(46, 125, 50),
            green_winner_colour: Color::Rgb(0, 230, 118),

            warning_colour: Color::Rgb(250, 189, 47),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg_colour: Color::Rgb(30, 30, 30),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}
