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

//! Host environment capabilities.
//!
//! The player needs three things from whatever it runs inside: the current
//! viewport size, notification when that size changes, and a way to switch
//! presentation (fullscreen) mode on and off. [`HostEnvironment`] captures
//! these so the controller can be exercised without a real terminal.

mod terminal;

pub(crate) use terminal::TerminalHost;

use crate::model::sizing::ViewportSize;

/// Size of one terminal cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellSize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

pub(crate) trait HostEnvironment {
    fn viewport(&self) -> ViewportSize;

    fn cell_size(&self) -> CellSize;

    /// Records a new window size in terminal cells.
    fn resized(&mut self, columns: u16, rows: u16);

    /// Best-effort toggle of fullscreen presentation.
    ///
    /// Returns the mode in effect afterwards; a host that cannot switch simply
    /// reports the unchanged mode.
    fn toggle_fullscreen(&mut self) -> bool;

    fn is_fullscreen(&self) -> bool;
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// In-memory host used by controller and rendering tests.
    #[derive(Debug, Default)]
    pub(crate) struct FakeHost {
        pub(crate) viewport: ViewportSize,
        pub(crate) fullscreen: bool,
        pub(crate) refuse_fullscreen: bool,
    }

    impl FakeHost {
        pub(crate) fn with_viewport(width: u32, height: u32) -> Self {
            Self {
                viewport: ViewportSize::new(width, height),
                ..Self::default()
            }
        }
    }

    impl HostEnvironment for FakeHost {
        fn viewport(&self) -> ViewportSize {
            self.viewport
        }

        fn cell_size(&self) -> CellSize {
            CellSize::default()
        }

        fn resized(&mut self, columns: u16, rows: u16) {
            let cell = self.cell_size();
            self.viewport = ViewportSize::new(
                u32::from(columns) * cell.width,
                u32::from(rows) * cell.height,
            );
        }

        fn toggle_fullscreen(&mut self) -> bool {
            if !self.refuse_fullscreen {
                self.fullscreen = !self.fullscreen;
            }
            self.fullscreen
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
    }
}
