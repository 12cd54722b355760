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

//! Automatic advancement timer.
//!
//! The [`TimerDriver`] keeps at most one recurring schedule alive. Each
//! schedule runs on its own worker thread and delivers ticks through a
//! [`TickSink`], normally the application event channel. Ticks carry the
//! generation of the schedule that produced them so the event loop can drop
//! any tick that was already queued when the schedule was replaced.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

use tracing::{debug, trace};

use crate::{events::AppEvent, model::playback::Playback};

/// Receiver of timer ticks.
pub(crate) trait TickSink: Clone + Send + 'static {
    /// Delivers a tick, returning `false` once nobody is listening any more.
    fn tick(&self, generation: u64) -> bool;
}

impl TickSink for Sender<AppEvent> {
    fn tick(&self, generation: u64) -> bool {
        self.send(AppEvent::Advance(generation)).is_ok()
    }
}

/// A live recurring schedule.
///
/// Dropping the cancellation sender wakes the worker immediately and ends it.
#[derive(Debug)]
pub(crate) struct TimerHandle {
    generation: u64,
    cancel_tx: Option<Sender<()>>,
}

impl TimerHandle {
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.cancel_tx.is_some()
    }
}

/// The part of the playback state that determines the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schedule {
    interval_ms: u64,
    len: usize,
    epoch: u64,
}

impl Schedule {
    fn for_playback(playback: &Playback) -> Option<Self> {
        (playback.is_playing() && !playback.is_empty()).then(|| Self {
            interval_ms: playback.interval_ms(),
            len: playback.len(),
            epoch: playback.epoch(),
        })
    }
}

pub(crate) struct TimerDriver<S: TickSink> {
    sink: S,
    handle: Option<TimerHandle>,
    schedule: Option<Schedule>,
    generation: u64,
}

impl<S: TickSink> TimerDriver<S> {
    pub(crate) fn new(sink: S) -> Self {
        Self {
            sink,
            handle: None,
            schedule: None,
            generation: 0,
        }
    }

    /// Starts a recurring tick every `interval` and returns its handle.
    pub(crate) fn arm(&mut self, interval: Duration) -> TimerHandle {
        self.generation += 1;
        let generation = self.generation;

        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let sink = self.sink.clone();

        thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        trace!(generation, "Timer tick");
                        if !sink.tick(generation) {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        debug!(generation, interval_ms = interval.as_millis() as u64, "Timer armed");

        TimerHandle {
            generation,
            cancel_tx: Some(cancel_tx),
        }
    }

    /// Cancels a schedule; calling it again on the same handle does nothing.
    pub(crate) fn disarm(handle: &mut TimerHandle) {
        if handle.cancel_tx.take().is_some() {
            debug!(generation = handle.generation, "Timer disarmed");
        }
    }

    /// Brings the schedule in line with `playback`.
    ///
    /// Whenever the play flag, interval or list differs from the last sync,
    /// any existing schedule is cancelled and, if playback should still
    /// advance, a new one is armed at the current interval. A restart with a
    /// list of the same length counts as a different list.
    pub(crate) fn sync(&mut self, playback: &Playback) {
        let wanted = Schedule::for_playback(playback);
        if wanted == self.schedule {
            return;
        }

        if let Some(handle) = self.handle.as_mut() {
            Self::disarm(handle);
        }
        self.handle = match wanted {
            Some(schedule) => Some(self.arm(Duration::from_millis(schedule.interval_ms))),
            None => None,
        };
        self.schedule = wanted;
    }

    /// Cancels the active schedule, if any.
    pub(crate) fn stop(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            Self::disarm(handle);
        }
        self.handle = None;
        self.schedule = None;
    }

    /// Whether a tick of `generation` still belongs to the active schedule.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| handle.is_armed() && handle.generation() == generation)
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(TimerHandle::is_armed)
    }

    /// Generation of the armed schedule, if any.
    #[cfg(test)]
    pub(crate) fn active_generation(&self) -> Option<u64> {
        self.handle
            .as_ref()
            .filter(|handle| handle.is_armed())
            .map(TimerHandle::generation)
    }
}

impl<S: TickSink> Drop for TimerDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
