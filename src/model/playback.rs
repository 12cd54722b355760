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

//! Playback state machine.
//!
//! [`Playback`] owns the parsed identifier list, the current position and the
//! play/pause, interval, loop and label settings. All transitions are total:
//! operating on an empty list is a no-op rather than an error, and
//! out-of-range intervals are clamped.
//!
//! # End of list
//!
//! When looping is off, advancing past the last identifier leaves the position
//! on the last identifier and does *not* pause; the display simply stops
//! changing. Stepping backwards always wraps from the first identifier to the
//! last regardless of the loop setting, so a manual rewind is always possible.

use tracing::debug;

use crate::model::{IdentifierList, tokenize::tokenize};

pub(crate) const MIN_INTERVAL_MS: u64 = 150;
pub(crate) const MAX_INTERVAL_MS: u64 = 5000;
pub(crate) const DEFAULT_INTERVAL_MS: u64 = 800;

/// Keyboard adjustment applied by the speed shortcuts.
pub(crate) const INTERVAL_STEP_MS: i64 = 100;

/// Clamps an interval in milliseconds to the supported range.
pub(crate) fn clamp_interval(ms: i64) -> u64 {
    ms.clamp(MIN_INTERVAL_MS as i64, MAX_INTERVAL_MS as i64) as u64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playback {
    list: IdentifierList,
    position: usize,
    is_playing: bool,
    interval_ms: u64,
    looping: bool,
    show_label: bool,
    /// Bumped whenever the list is replaced or cleared.
    epoch: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS as i64, true, true)
    }
}

impl Playback {
    /// Creates an empty, paused machine with the given settings.
    pub(crate) fn new(interval_ms: i64, looping: bool, show_label: bool) -> Self {
        Self {
            list: IdentifierList::default(),
            position: 0,
            is_playing: false,
            interval_ms: clamp_interval(interval_ms),
            looping,
            show_label,
            epoch: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn list(&self) -> &IdentifierList {
        &self.list
    }

    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub(crate) fn looping(&self) -> bool {
        self.looping
    }

    pub(crate) fn show_label(&self) -> bool {
        self.show_label
    }

    /// Identifies the current list; two lists with equal contents started
    /// one after the other still have different epochs.
    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    /// One-based position and list length, or `None` before anything has been
    /// parsed.
    pub(crate) fn progress(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.position + 1, self.len()))
        }
    }

    /// The identifier to display; empty when there is nothing to show.
    pub(crate) fn current_identifier(&self) -> &str {
        self.list.get(self.position).unwrap_or_default()
    }

    /// Parses `raw`, replaces the list and starts playing from the first
    /// identifier when anything was found.
    pub(crate) fn start(&mut self, raw: &str) {
        self.list = tokenize(raw);
        self.epoch = self.epoch.wrapping_add(1);
        self.position = 0;
        self.is_playing = !self.list.is_empty();

        debug!(count = self.list.len(), "Parsed tracking list");
    }

    pub(crate) fn clear(&mut self) {
        self.list = IdentifierList::default();
        self.epoch = self.epoch.wrapping_add(1);
        self.position = 0;
        self.is_playing = false;
    }

    pub(crate) fn toggle_play(&mut self) {
        if self.is_empty() {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    pub(crate) fn next(&mut self) {
        if self.is_empty() {
            return;
        }

        if self.position + 1 < self.len() {
            self.position += 1;
        } else if self.looping {
            self.position = 0;
        }
    }

    pub(crate) fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.position = (self.position + self.len() - 1) % self.len();
    }

    pub(crate) fn set_interval(&mut self, ms: i64) {
        self.interval_ms = clamp_interval(ms);
    }

    /// Shifts the interval by `delta` milliseconds, staying within range.
    pub(crate) fn adjust_interval(&mut self, delta: i64) {
        self.set_interval((self.interval_ms as i64).saturating_add(delta));
    }

    pub(crate) fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub(crate) fn set_show_label(&mut self, show_label: bool) {
        self.show_label = show_label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(raw: &str, looping: bool) -> Playback {
        let mut playback = Playback::new(DEFAULT_INTERVAL_MS as i64, looping, true);
        playback.start(raw);
        playback
    }

    fn visit_with_next(playback: &mut Playback, steps: usize) -> Vec<usize> {
        let mut visited = vec![playback.position()];
        for _ in 0..steps {
            playback.next();
            visited.push(playback.position());
        }
        visited
    }

    #[test]
    fn starts_empty_and_paused() {
        let playback = Playback::default();

        assert!(playback.is_empty());
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), 0);
        assert_eq!(playback.current_identifier(), "");
        assert_eq!(playback.progress(), None);
    }

    #[test]
    fn start_replaces_list_and_plays() {
        let mut playback = started("a b", true);
        playback.next();
        playback.toggle_play();

        playback.start("x\ny\nz");

        assert_eq!(playback.len(), 3);
        assert_eq!(playback.position(), 0);
        assert!(playback.is_playing());
        assert_eq!(playback.current_identifier(), "x");
    }

    #[test]
    fn start_with_no_identifiers_stays_paused() {
        let mut playback = started("1 2", true);
        assert!(playback.is_playing());

        playback.start(" ,; \n");

        assert!(playback.is_empty());
        assert!(!playback.is_playing());
    }

    #[test]
    fn next_stalls_on_last_without_loop() {
        let mut playback = started("1\n2\n3", false);

        assert_eq!(visit_with_next(&mut playback, 3), [0, 1, 2, 2]);
        // Reaching the end does not pause.
        assert!(playback.is_playing());
        assert_eq!(playback.current_identifier(), "3");
    }

    #[test]
    fn next_wraps_with_loop() {
        let mut playback = started("1\n2\n3", true);

        assert_eq!(visit_with_next(&mut playback, 3), [0, 1, 2, 0]);
    }

    #[test]
    fn prev_wraps_regardless_of_loop() {
        for looping in [true, false] {
            let mut playback = started("1\n2\n3", looping);

            playback.prev();

            assert_eq!(playback.position(), 2);
            assert_eq!(playback.current_identifier(), "3");
        }
    }

    #[test]
    fn navigation_on_empty_list_is_a_no_op() {
        let mut playback = Playback::default();
        let before = playback.clone();

        for _ in 0..5 {
            playback.toggle_play();
            playback.next();
            playback.prev();
        }

        assert_eq!(playback, before);
    }

    #[test]
    fn clear_resets_list_and_stops() {
        let mut playback = started("1 2 3", true);
        playback.next();

        playback.clear();

        assert!(playback.is_empty());
        assert_eq!(playback.position(), 0);
        assert!(!playback.is_playing());
        assert_eq!(playback.current_identifier(), "");
    }

    #[test]
    fn toggle_play_flips_when_loaded() {
        let mut playback = started("1", true);

        playback.toggle_play();
        assert!(!playback.is_playing());
        playback.toggle_play();
        assert!(playback.is_playing());
    }

    #[test]
    fn interval_is_clamped() {
        let mut playback = Playback::default();

        playback.set_interval(50);
        assert_eq!(playback.interval_ms(), 150);

        playback.set_interval(9999);
        assert_eq!(playback.interval_ms(), 5000);

        playback.set_interval(-1);
        assert_eq!(playback.interval_ms(), 150);

        playback.set_interval(1234);
        assert_eq!(playback.interval_ms(), 1234);
    }

    #[test]
    fn interval_adjustment_stops_at_bounds() {
        let mut playback = Playback::new(200, true, true);

        playback.adjust_interval(-INTERVAL_STEP_MS);
        assert_eq!(playback.interval_ms(), 150);
        playback.adjust_interval(-INTERVAL_STEP_MS);
        assert_eq!(playback.interval_ms(), 150);

        playback.set_interval(4950);
        playback.adjust_interval(INTERVAL_STEP_MS);
        assert_eq!(playback.interval_ms(), 5000);
    }

    #[test]
    fn loop_and_label_are_independent() {
        let mut playback = started("1 2", true);
        let position = playback.position();

        playback.set_loop(false);
        playback.set_show_label(false);

        assert!(!playback.looping());
        assert!(!playback.show_label());
        assert!(playback.is_playing());
        assert_eq!(playback.position(), position);

        playback.set_show_label(true);
        assert!(!playback.looping());
    }

    #[test]
    fn progress_is_one_based() {
        let mut playback = started("a b c d", true);
        playback.next();

        assert_eq!(playback.progress(), Some((2, 4)));
    }

    #[test]
    fn single_item_list() {
        let mut playback = started("only", false);

        playback.next();
        assert_eq!(playback.position(), 0);
        playback.prev();
        assert_eq!(playback.position(), 0);
    }
}
