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

//! Adaptive QR code sizing.
//!
//! The code is sized from the smaller viewport dimension so that it grows
//! when the terminal is enlarged (or switched to presentation mode) and
//! shrinks with it, while leaving room for the label and hint lines.

/// Fraction of the smaller viewport dimension given to the code.
const USABLE_FRACTION: f64 = 0.65;

pub(crate) const MIN_PRESENTATION_SIZE: u32 = 260;
pub(crate) const MAX_PRESENTATION_SIZE: u32 = 900;

/// Viewport dimensions in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ViewportSize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl ViewportSize {
    pub(crate) const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Edge length, in pixels, of the square the code is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct PresentationSize(pub(crate) u32);

impl PresentationSize {
    pub(crate) fn pixels(self) -> u32 {
        self.0
    }
}

pub(crate) fn compute_size(viewport: ViewportSize) -> PresentationSize {
    let usable = f64::from(viewport.width.min(viewport.height)) * USABLE_FRACTION;
    let clamped = usable.clamp(
        f64::from(MIN_PRESENTATION_SIZE),
        f64::from(MAX_PRESENTATION_SIZE),
    );

    PresentationSize(clamped.floor() as u32)
}
