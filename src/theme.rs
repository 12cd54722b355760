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
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.
//!
//! QR codes are always drawn dark-on-light regardless of the palette, since
//! most scanners expect that polarity.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) disabled_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
    pub(crate) error_colour: Color,

    pub(crate) code_dark: Color,
    pub(crate) code_light: Color,
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
            background_colour: Color::Rgb(24, 26, 32),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(250, 189, 47),
            text_colour: Color::Rgb(230, 230, 230),
            muted_colour: Color::Rgb(136, 136, 136),
            disabled_colour: Color::Rgb(80, 80, 80),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(40, 44, 52),
            error_colour: Color::Rgb(235, 87, 87),

            code_dark: Color::Rgb(0, 0, 0),
            code_light: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background colour.
    ///
    /// Returns `None` for non-RGB colours, which have no fixed value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 26, 255)).as_deref(), Some("#181aff"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
