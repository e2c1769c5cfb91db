//! In-memory audio output and timers.
//!
//! Used by tests and by hosts that render offline instead of playing
//! through a sound device.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use super::{AudioOutput, CompletionTimer};
use crate::tone::ToneEvent;

/// Audio clock advanced by hand. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Jump to `seconds`.
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    /// Move forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

/// Output that records every tone instead of playing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingOutput {
    clock: ManualClock,
    events: Vec<ToneEvent>,
    active: bool,
    activations: u32,
    failure: Option<&'static str>,
    tone_limit: Option<usize>,
}

impl RecordingOutput {
    /// Recording output reading time from `clock`.
    #[must_use]
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Output that refuses to start, as when the host blocks audio.
    #[must_use]
    pub fn unavailable(reason: &'static str) -> Self {
        Self {
            failure: Some(reason),
            ..Self::default()
        }
    }

    /// Output that accepts `tones` tones and refuses the rest.
    #[must_use]
    pub fn refusing_after(clock: ManualClock, tones: usize) -> Self {
        Self {
            clock,
            tone_limit: Some(tones),
            ..Self::default()
        }
    }

    /// Recorded tones, in scheduling order.
    #[must_use]
    pub fn events(&self) -> &[ToneEvent] {
        &self.events
    }

    /// Take the recorded tones, leaving the recorder empty.
    pub fn take_events(&mut self) -> Vec<ToneEvent> {
        core::mem::take(&mut self.events)
    }

    /// Whether `ensure_active` has succeeded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// How many times the output actually transitioned to active.
    #[must_use]
    pub fn activations(&self) -> u32 {
        self.activations
    }

    /// Simulate the host suspending audio.
    pub fn suspend(&mut self) {
        self.active = false;
    }

    /// Shared clock.
    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }
}

impl AudioOutput for RecordingOutput {
    type Error = &'static str;

    fn current_time(&self) -> f64 {
        self.clock.now()
    }

    fn ensure_active(&mut self) -> Result<(), Self::Error> {
        if let Some(reason) = self.failure {
            return Err(reason);
        }
        if !self.active {
            self.active = true;
            self.activations += 1;
        }
        Ok(())
    }

    fn play_tone(&mut self, tone: &ToneEvent) -> Result<(), Self::Error> {
        if !self.active {
            return Err("output not active");
        }
        if self.tone_limit.is_some_and(|limit| self.events.len() >= limit) {
            return Err("output refused tone");
        }
        self.events.push(*tone);
        Ok(())
    }
}

/// Wall-clock timer advanced by hand.
pub struct ManualTimer {
    now_ms: f64,
    pending: Vec<(f64, Box<dyn FnOnce()>)>,
    last_delay_ms: Option<f64>,
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimer {
    /// Timer at time zero with nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            pending: Vec::new(),
            last_delay_ms: None,
        }
    }

    /// Number of callbacks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Delay of the most recent `arm` call.
    #[must_use]
    pub fn last_delay_ms(&self) -> Option<f64> {
        self.last_delay_ms
    }

    /// Move wall-clock time forward and fire every callback now due.
    ///
    /// Returns the number of callbacks fired.
    pub fn advance(&mut self, ms: f64) -> usize {
        self.now_ms += ms;
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut idx = 0;
        while idx < self.pending.len() {
            if self.pending[idx].0 <= now {
                due.push(self.pending.remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0));

        let fired = due.len();
        for (_, callback) in due {
            callback();
        }
        fired
    }
}

impl CompletionTimer for ManualTimer {
    fn arm(&mut self, delay_ms: f64, on_complete: Box<dyn FnOnce()>) {
        self.last_delay_ms = Some(delay_ms);
        self.pending.push((self.now_ms + delay_ms, on_complete));
    }
}
