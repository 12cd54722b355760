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

//! QR symbol encoding and drawing.
//!
//! Symbols are encoded with the `qrcode` crate and drawn with half-block
//! characters, so each terminal cell carries two vertically stacked modules.
//! On a typical 1:2 cell this makes every module square. The drawn symbol is
//! scaled by whole multiples to approach the requested presentation size
//! without exceeding the area it is given.

use qrcode::{Color as ModuleColour, EcLevel, QrCode};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{host::CellSize, model::sizing::PresentationSize, theme::Theme};

/// Light modules kept around the symbol on every side.
const QUIET_ZONE: usize = 4;

/// QR error-correction level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub(crate) enum ErrorLevel {
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    #[default]
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl From<ErrorLevel> for EcLevel {
    fn from(level: ErrorLevel) -> Self {
        match level {
            ErrorLevel::L => EcLevel::L,
            ErrorLevel::M => EcLevel::M,
            ErrorLevel::Q => EcLevel::Q,
            ErrorLevel::H => EcLevel::H,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum QrError {
    #[error("cannot encode \"{value}\" as a QR code: {source}")]
    Encode {
        value: String,
        source: qrcode::types::QrError,
    },

    #[error("window too small for the code ({needed}x{needed_rows} cells needed)")]
    TooSmall { needed: u16, needed_rows: u16 },
}

/// An encoded symbol including its quiet zone.
#[derive(Debug, Clone)]
pub(crate) struct QrSymbol {
    width: usize,
    dark: Vec<bool>,
}

impl QrSymbol {
    pub(crate) fn encode(value: &str, level: ErrorLevel) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(value.as_bytes(), level.into()).map_err(
            |source| QrError::Encode {
                value: value.to_string(),
                source,
            },
        )?;

        let dark = code
            .to_colors()
            .into_iter()
            .map(|colour| colour == ModuleColour::Dark)
            .collect();

        Ok(Self {
            width: code.width(),
            dark,
        })
    }

    /// Modules per side, quiet zone included.
    pub(crate) fn span(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    /// Whether the module at `(x, y)` is dark, in quiet-zone coordinates.
    pub(crate) fn is_dark(&self, x: usize, y: usize) -> bool {
        let (Some(x), Some(y)) = (x.checked_sub(QUIET_ZONE), y.checked_sub(QUIET_ZONE)) else {
            return false;
        };
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

/// Draws a [`QrSymbol`] centred in its area.
pub(crate) struct QrWidget<'a> {
    symbol: &'a QrSymbol,
    size: PresentationSize,
    cell: CellSize,
    theme: &'a Theme,
}

impl<'a> QrWidget<'a> {
    pub(crate) fn new(
        symbol: &'a QrSymbol,
        size: PresentationSize,
        cell: CellSize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            symbol,
            size,
            cell,
            theme,
        }
    }

    /// Chooses the module scale for `area`.
    ///
    /// The scale is the largest whole multiple that fits both the requested
    /// size and the area, but never below one.
    pub(crate) fn scale(&self, area: Rect) -> Result<usize, QrError> {
        let span = self.symbol.span();
        let target_columns = (self.size.pixels() / self.cell.width.max(1)) as usize;

        let by_size = (target_columns / span).max(1);
        let by_width = usize::from(area.width) / span;
        let by_height = usize::from(area.height) * 2 / span;

        let scale = by_size.min(by_width).min(by_height);
        if scale == 0 {
            return Err(QrError::TooSmall {
                needed: span as u16,
                needed_rows: span.div_ceil(2) as u16,
            });
        }

        Ok(scale)
    }
}

impl Widget for QrWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Ok(scale) = self.scale(area) else {
            return;
        };

        let modules = self.symbol.span() * scale;
        let columns = modules as u16;
        let rows = modules.div_ceil(2) as u16;

        let left = area.x + (area.width - columns) / 2;
        let top = area.y + (area.height - rows) / 2;

        let style = Style::default()
            .fg(self.theme.code_dark)
            .bg(self.theme.code_light);

        let dark = |mx: usize, my: usize| my < modules && self.symbol.is_dark(mx / scale, my / scale);

        for row in 0..rows {
            let upper = usize::from(row) * 2;
            for column in 0..columns {
                let mx = usize::from(column);
                let glyph = match (dark(mx, upper), dark(mx, upper + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };

                if let Some(cell) = buf.cell_mut((left + column, top + row)) {
                    cell.set_char(glyph).set_style(style);
                }
            }
        }
    }
}
