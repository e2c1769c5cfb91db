//! Audio scheduler.
//!
//! Turns a Morse sequence into [`ToneEvent`]s placed on an audio clock and
//! arms a wall-clock timer that fires once playback has finished.
//!
//! Scheduling is front-loaded: every tone is handed to the [`AudioOutput`]
//! before [`Scheduler::schedule`] returns, and nothing can be revoked
//! afterwards. Both the tone placement and the completion delay are
//! computed from the same integer unit count.
//!
//! # Cursor arithmetic
//!
//! | character | tone     | cursor advance |
//! |-----------|----------|----------------|
//! | `.`       | 1 unit   | 2 units        |
//! | `-`       | 3 units  | 4 units        |
//! | space     | none     | 3 units        |
//! | `/`       | none     | 7 units        |
//! | other     | none     | 1 unit         |

mod detune;
mod fake;
mod gate;

pub use detune::{Detune, FixedDetune, NoDetune, RandomDetune};
pub use fake::{ManualClock, ManualTimer, RecordingOutput};
pub use gate::{PlaybackGate, PlaybackToken, TransmitError, Transmitter};

use alloc::boxed::Box;
use alloc::vec::Vec;

use thiserror::Error;

use crate::config::{ScheduleConfig, ELEMENT_GAP_UNITS};
use crate::pulse::Element;
use crate::tone::{ToneEvent, Waveform};

/// Audio output handle.
///
/// Owns the device (or browser) audio context and its clock.
pub trait AudioOutput {
    /// Error raised when audio cannot be produced.
    type Error;

    /// Current audio clock time in seconds.
    fn current_time(&self) -> f64;

    /// Make sure the output is running. Calling it again is a no-op.
    fn ensure_active(&mut self) -> Result<(), Self::Error>;

    /// Queue one tone on the audio clock.
    fn play_tone(&mut self, tone: &ToneEvent) -> Result<(), Self::Error>;
}

/// Wall-clock one-shot timer.
pub trait CompletionTimer {
    /// Run `on_complete` once, `delay_ms` milliseconds from now.
    fn arm(&mut self, delay_ms: f64, on_complete: Box<dyn FnOnce()>);
}

/// Scheduling error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScheduleError<E> {
    /// Audio output unavailable or refused a tone
    #[error("audio output unavailable: {0:?}")]
    Output(E),
}

/// Result of scheduling one Morse sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    /// Audio clock time when scheduling happened
    pub scheduled_at: f64,
    /// Audio clock time of the first unit (after the lead-in)
    pub start_time: f64,
    /// Audio clock time when the cursor stopped
    pub end_time: f64,
    /// Lead-in in seconds
    pub lead_in: f64,
    /// Cursor position in units
    pub total_units: u32,
    /// Scheduled tones, in time order
    pub events: Vec<ToneEvent>,
}

impl Schedule {
    /// Time from scheduling until the cursor end, in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.end_time - self.scheduled_at
    }

    /// Completion delay handed to the wall-clock timer.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_seconds() * 1000.0
    }

    /// Number of tones.
    #[must_use]
    pub fn tone_count(&self) -> usize {
        self.events.len()
    }
}

/// Units the cursor moves for one Morse character.
fn advance(ch: char) -> (Option<Element>, u32) {
    match Element::from_char(ch) {
        Some(element) if element.is_tone() => {
            (Some(element), element.units() + ELEMENT_GAP_UNITS)
        }
        Some(element) => (Some(element), element.units()),
        None => (None, ELEMENT_GAP_UNITS),
    }
}

/// Total cursor advance for a Morse sequence, in units.
///
/// Equals `2*dots + 4*dashes + 3*letter_gaps + 7*word_gaps`, including the
/// gap after a final tone.
#[must_use]
pub fn total_units(morse: &str) -> u32 {
    morse.chars().map(|ch| advance(ch).1).sum()
}

/// Lay out tone events for a Morse sequence without touching any output.
///
/// `scheduled_at` is "now" on the audio clock; the first unit begins
/// `config.lead_in_seconds` later.
pub fn plan<D: Detune + ?Sized>(
    morse: &str,
    scheduled_at: f64,
    config: &ScheduleConfig,
    interference: bool,
    detune: &mut D,
) -> Schedule {
    let start_time = scheduled_at + config.lead_in_seconds;
    let waveform = if interference {
        Waveform::Sawtooth
    } else {
        Waveform::Sine
    };
    let peak = config.peak(interference);

    let mut cursor = 0u32;
    let mut events = Vec::new();

    for ch in morse.chars() {
        let (element, step) = advance(ch);
        if let Some(element) = element.filter(Element::is_tone) {
            let frequency_hz = if interference {
                config.frequency_hz + detune.offset_hz(config.detune_hz)
            } else {
                config.frequency_hz
            };
            events.push(ToneEvent::new(
                start_time + config.seconds(cursor),
                config.seconds(element.units()),
                frequency_hz,
                waveform,
                peak,
                config.fade_seconds,
            ));
        }
        cursor += step;
    }

    Schedule {
        scheduled_at,
        start_time,
        end_time: start_time + config.seconds(cursor),
        lead_in: config.lead_in_seconds,
        total_units: cursor,
        events,
    }
}

/// Audio scheduler bound to one output and one completion timer.
pub struct Scheduler<O, T, D = NoDetune> {
    output: O,
    timer: T,
    detune: D,
    config: ScheduleConfig,
}

impl<O, T> Scheduler<O, T, NoDetune>
where
    O: AudioOutput,
    T: CompletionTimer,
{
    /// Create a scheduler that never detunes.
    #[must_use]
    pub fn new(output: O, timer: T) -> Self {
        Self::with_detune(output, timer, NoDetune)
    }
}

impl<O, T, D> Scheduler<O, T, D>
where
    O: AudioOutput,
    T: CompletionTimer,
    D: Detune,
{
    /// Create a scheduler with an interference detune source.
    #[must_use]
    pub fn with_detune(output: O, timer: T, detune: D) -> Self {
        Self {
            output,
            timer,
            detune,
            config: ScheduleConfig::default(),
        }
    }

    /// Replace the timing configuration.
    #[must_use]
    pub fn with_config(mut self, config: ScheduleConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Audio output handle.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutable audio output handle.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Completion timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable completion timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Queue every tone for `morse` and arm the completion timer.
    ///
    /// `on_complete` fires once, after the lead-in plus the whole cursor
    /// span has passed on the wall clock.
    ///
    /// On error `on_complete` is never called. If the output refused a tone
    /// after accepting earlier ones, those tones stay queued, and
    /// `on_complete` is held by the timer until the last of them ends and
    /// is then dropped. Otherwise it is dropped at once and no timer is armed.
    ///
    /// # Errors
    /// Returns [`ScheduleError::Output`] when the output cannot be activated
    /// or refuses a tone.
    pub fn schedule<F>(
        &mut self,
        morse: &str,
        interference: bool,
        on_complete: F,
    ) -> Result<Schedule, ScheduleError<O::Error>>
    where
        F: FnOnce() + 'static,
    {
        self.output.ensure_active().map_err(ScheduleError::Output)?;

        let now = self.output.current_time();
        let schedule = plan(morse, now, &self.config, interference, &mut self.detune);

        for (queued, tone) in schedule.events.iter().enumerate() {
            if let Err(e) = self.output.play_tone(tone) {
                if let Some(last) = queued.checked_sub(1).map(|i| &schedule.events[i]) {
                    let hold_ms = (last.end_time() - now) * 1000.0;
                    log::warn!(
                        "output refused tone {} of {}; holding until {:.3}s",
                        queued + 1,
                        schedule.tone_count(),
                        last.end_time()
                    );
                    self.timer.arm(hold_ms, Box::new(move || drop(on_complete)));
                }
                return Err(ScheduleError::Output(e));
            }
        }

        log::debug!(
            "scheduled {} tones over {} units ({:.3}s, interference={})",
            schedule.tone_count(),
            schedule.total_units,
            schedule.elapsed_seconds(),
            interference
        );

        self.timer.arm(schedule.elapsed_ms(), Box::new(on_complete));
        Ok(schedule)
    }
}
