//! Offline tone synthesis.
//!
//! Renders a [`Schedule`] into mono PCM using a phase-accumulator
//! oscillator per tone and the tone's gain envelope.

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::scheduler::Schedule;
use crate::tone::{ToneEvent, Waveform};

/// Phase-accumulator oscillator.
///
/// Phase is kept in cycles (0 to 1) so the sawtooth needs no trig.
#[derive(Clone, Debug)]
pub struct ToneOscillator {
    /// Current phase in cycles
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    waveform: Waveform,
}

impl ToneOscillator {
    /// Create an oscillator.
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `frequency` - Frequency in Hz
    /// * `waveform` - Output shape
    #[must_use]
    pub fn new(sample_rate: f32, frequency: f32, waveform: Waveform) -> Self {
        Self {
            phase: 0.0,
            phase_inc: frequency / sample_rate,
            waveform,
        }
    }

    /// Generate the next sample (-1 to 1) and advance phase.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let output = match self.waveform {
            Waveform::Sine => (2.0 * PI * self.phase).sin(),
            Waveform::Sawtooth => 2.0 * self.phase - 1.0,
        };
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        output
    }

    /// Reset phase to zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Renders scheduled tones to PCM.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    sample_rate: u32,
}

impl Synthesizer {
    /// Create a synthesizer at `sample_rate` Hz.
    #[must_use]
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate: sample_rate.max(1),
        }
    }

    /// Sample rate in Hz.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn sample_index(&self, seconds: f64) -> usize {
        let idx = seconds * f64::from(self.sample_rate);
        if idx <= 0.0 {
            0
        } else {
            idx as usize
        }
    }

    /// Render a whole schedule.
    ///
    /// Sample 0 is the moment the schedule was made, so the output starts
    /// with the lead-in silence and ends at the cursor end.
    #[must_use]
    pub fn render(&self, schedule: &Schedule) -> Vec<f32> {
        let len = self.sample_index(schedule.elapsed_seconds());
        let mut out = vec![0.0f32; len];
        for tone in &schedule.events {
            self.mix_tone(&mut out, tone, schedule.scheduled_at);
        }
        for sample in &mut out {
            *sample = sample.clamp(-1.0, 1.0);
        }
        out
    }

    /// Add one tone into `out`, where `out[0]` is at audio time `origin`.
    pub fn mix_tone(&self, out: &mut [f32], tone: &ToneEvent, origin: f64) {
        let rate = f64::from(self.sample_rate);
        let first = self.sample_index(tone.start_time - origin);
        let last = self.sample_index(tone.end_time() - origin).min(out.len());
        if first >= last {
            return;
        }

        let mut osc = ToneOscillator::new(self.sample_rate as f32, tone.frequency_hz, tone.waveform);
        for (idx, sample) in out[first..last].iter_mut().enumerate() {
            let t = origin + (first + idx) as f64 / rate;
            *sample += osc.next_sample() * tone.envelope.gain_at(t);
        }
    }
}
