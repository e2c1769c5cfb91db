//! In-flight tracking for transmissions.
//!
//! The scheduler itself never refuses work. Callers that must not overlap
//! two transmissions hold a [`PlaybackToken`] until the completion callback
//! runs; [`Transmitter`] does this for them.

use alloc::rc::Rc;
use core::cell::Cell;

use thiserror::Error;

use super::{AudioOutput, CompletionTimer, Detune, NoDetune, Schedule, ScheduleError, Scheduler};

/// Shared "a transmission is playing" flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct PlaybackGate {
    busy: Rc<Cell<bool>>,
}

impl PlaybackGate {
    /// Idle gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transmission is in flight.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.busy.get()
    }

    /// Mark the gate busy, or `None` if it already is.
    #[must_use]
    pub fn try_acquire(&self) -> Option<PlaybackToken> {
        if self.busy.replace(true) {
            return None;
        }
        Some(PlaybackToken {
            busy: Rc::clone(&self.busy),
        })
    }
}

/// Proof of an in-flight transmission. Dropping it frees the gate.
#[derive(Debug)]
pub struct PlaybackToken {
    busy: Rc<Cell<bool>>,
}

impl PlaybackToken {
    /// Free the gate now.
    pub fn release(self) {}
}

impl Drop for PlaybackToken {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// Transmission error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransmitError<E> {
    /// Previous transmission has not completed
    #[error("a transmission is already in flight")]
    Busy,
    /// Morse sequence is empty
    #[error("nothing to transmit")]
    Empty,
    /// Scheduling failed
    #[error("{0}")]
    Schedule(ScheduleError<E>),
}

impl<E> From<ScheduleError<E>> for TransmitError<E> {
    fn from(e: ScheduleError<E>) -> Self {
        TransmitError::Schedule(e)
    }
}

/// Scheduler guarded by a [`PlaybackGate`].
pub struct Transmitter<O, T, D = NoDetune> {
    scheduler: Scheduler<O, T, D>,
    gate: PlaybackGate,
}

impl<O, T, D> Transmitter<O, T, D>
where
    O: AudioOutput,
    T: CompletionTimer,
    D: Detune,
{
    /// Wrap a scheduler with a fresh gate.
    #[must_use]
    pub fn new(scheduler: Scheduler<O, T, D>) -> Self {
        Self {
            scheduler,
            gate: PlaybackGate::new(),
        }
    }

    /// The gate; clone it to observe playback state elsewhere.
    #[must_use]
    pub fn gate(&self) -> &PlaybackGate {
        &self.gate
    }

    /// Whether a transmission is in flight.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.gate.is_playing()
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &Scheduler<O, T, D> {
        &self.scheduler
    }

    /// Mutable underlying scheduler.
    pub fn scheduler_mut(&mut self) -> &mut Scheduler<O, T, D> {
        &mut self.scheduler
    }

    /// Schedule `morse` unless a transmission is already playing.
    ///
    /// The gate reopens just before `on_complete` runs. If scheduling fails
    /// before any tone is queued the gate reopens immediately; if some tones
    /// were already queued it stays closed until the last of them ends.
    ///
    /// # Errors
    /// - [`TransmitError::Empty`] when `morse` is empty
    /// - [`TransmitError::Busy`] while a previous transmission is playing
    /// - [`TransmitError::Schedule`] when the output fails
    pub fn transmit<F>(
        &mut self,
        morse: &str,
        interference: bool,
        on_complete: F,
    ) -> Result<Schedule, TransmitError<O::Error>>
    where
        F: FnOnce() + 'static,
    {
        if morse.is_empty() {
            return Err(TransmitError::Empty);
        }
        let token = self.gate.try_acquire().ok_or(TransmitError::Busy)?;

        let schedule = self.scheduler.schedule(morse, interference, move || {
            token.release();
            on_complete();
        })?;
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ManualClock, ManualTimer, RecordingOutput};

    #[test]
    fn test_gate_single_holder() {
        let gate = PlaybackGate::new();
        let token = gate.try_acquire().unwrap();
        assert!(gate.is_playing());
        assert!(gate.try_acquire().is_none());

        drop(token);
        assert!(!gate.is_playing());
        assert!(gate.try_acquire().is_some());
    }

    #[test]
    fn test_gate_clones_share_state() {
        let gate = PlaybackGate::new();
        let observer = gate.clone();
        let _token = gate.try_acquire().unwrap();
        assert!(observer.is_playing());
    }

    #[test]
    fn test_transmit_rejects_empty() {
        let scheduler = Scheduler::new(RecordingOutput::new(ManualClock::new()), ManualTimer::new());
        let mut tx = Transmitter::new(scheduler);
        assert_eq!(tx.transmit("", false, || {}), Err(TransmitError::Empty));
        assert!(!tx.is_playing());
    }

    #[test]
    fn test_failed_schedule_reopens_gate() {
        let scheduler = Scheduler::new(RecordingOutput::unavailable("no device"), ManualTimer::new());
        let mut tx = Transmitter::new(scheduler);
        assert_eq!(
            tx.transmit(".", false, || {}),
            Err(TransmitError::Schedule(ScheduleError::Output("no device")))
        );
        assert!(!tx.is_playing());
    }

    #[test]
    fn test_partial_failure_keeps_gate_closed() {
        let output = RecordingOutput::refusing_after(ManualClock::new(), 2);
        let mut tx = Transmitter::new(Scheduler::new(output, ManualTimer::new()));

        assert!(tx.transmit("...", false, || {}).is_err());
        assert!(tx.is_playing());
        assert_eq!(tx.transmit("...", false, || {}), Err(TransmitError::Busy));

        let hold = tx.scheduler().timer().last_delay_ms().unwrap();
        tx.scheduler_mut().timer_mut().advance(hold + 1.0);
        assert!(!tx.is_playing());
    }
}
