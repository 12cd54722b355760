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

//! Display formatting helpers.

/// Formats a one-based position as a progress indicator, e.g. `"3 / 10"`.
pub(crate) fn format_progress(position: usize, len: usize) -> String {
    format!("{} / {}", position, len)
}

/// Formats an advance interval, e.g. `"800 ms"`.
pub(crate) fn format_interval(interval_ms: u64) -> String {
    format!("{} ms", interval_ms)
}
