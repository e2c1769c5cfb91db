//! Tone events and their gain envelopes.

/// Oscillator waveform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Pure tone
    #[default]
    Sine,
    /// Harsh tone used for interference
    Sawtooth,
}

impl Waveform {
    /// Web Audio oscillator type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Sawtooth => "sawtooth",
        }
    }
}

/// Linear attack/release gain envelope.
///
/// Gain ramps 0 → `peak` over the first `fade` seconds, holds, then ramps
/// `peak` → 0 over the last `fade` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Start time in seconds
    pub start: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Sustain gain
    pub peak: f32,
    /// Ramp length in seconds
    pub fade: f64,
}

impl Envelope {
    /// End time in seconds.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Automation breakpoints as `(time, gain)`, in time order.
    ///
    /// Matches the Web Audio sequence `setValueAtTime(0, start)`,
    /// `linearRamp(peak, start + fade)`, `setValueAtTime(peak, end - fade)`,
    /// `linearRamp(0, end)`.
    #[must_use]
    pub fn points(&self) -> [(f64, f32); 4] {
        let end = self.end();
        let fade = self.ramp();
        [
            (self.start, 0.0),
            (self.start + fade, self.peak),
            (end - fade, self.peak),
            (end, 0.0),
        ]
    }

    /// Fade length actually used: at most half the duration, so the
    /// breakpoints stay in time order.
    #[must_use]
    pub fn ramp(&self) -> f64 {
        self.fade.min(self.duration / 2.0).max(0.0)
    }

    /// Gain at time `t` (seconds, same clock as `start`).
    #[must_use]
    pub fn gain_at(&self, t: f64) -> f32 {
        let end = self.end();
        if t <= self.start || t >= end {
            return 0.0;
        }
        let fade = self.ramp();
        if fade <= 0.0 {
            return self.peak;
        }

        let since_start = t - self.start;
        let until_end = end - t;
        let ramp = since_start.min(until_end);
        if ramp >= fade {
            self.peak
        } else {
            self.peak * (ramp / fade) as f32
        }
    }
}

/// One scheduled tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneEvent {
    /// Start time on the audio clock, in seconds
    pub start_time: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Oscillator frequency in Hz
    pub frequency_hz: f32,
    /// Oscillator waveform
    pub waveform: Waveform,
    /// Gain envelope
    pub envelope: Envelope,
}

impl ToneEvent {
    /// Build a tone with the standard envelope.
    #[must_use]
    pub fn new(
        start_time: f64,
        duration: f64,
        frequency_hz: f32,
        waveform: Waveform,
        peak: f32,
        fade: f64,
    ) -> Self {
        Self {
            start_time,
            duration,
            frequency_hz,
            waveform,
            envelope: Envelope {
                start: start_time,
                duration,
                peak,
                fade,
            },
        }
    }

    /// Stop time on the audio clock.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> ToneEvent {
        ToneEvent::new(1.0, 0.08, 600.0, Waveform::Sine, 0.5, 0.01)
    }

    #[test]
    fn test_envelope_points() {
        let points = dot().envelope.points();
        assert_eq!(points[0], (1.0, 0.0));
        assert!((points[1].0 - 1.01).abs() < 1e-12);
        assert_eq!(points[1].1, 0.5);
        assert!((points[2].0 - 1.07).abs() < 1e-12);
        assert_eq!(points[3].1, 0.0);
    }

    #[test]
    fn test_gain_outside_tone_is_zero() {
        let env = dot().envelope;
        assert_eq!(env.gain_at(0.5), 0.0);
        assert_eq!(env.gain_at(1.0), 0.0);
        assert_eq!(env.gain_at(env.end()), 0.0);
        assert_eq!(env.gain_at(2.0), 0.0);
    }

    #[test]
    fn test_gain_ramps_and_holds() {
        let env = dot().envelope;
        assert!((env.gain_at(1.005) - 0.25).abs() < 1e-4);
        assert_eq!(env.gain_at(1.04), 0.5);
        assert!((env.gain_at(1.075) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_short_tone_clamps_fade() {
        // 10 ms tone with a 10 ms fade
        let env = ToneEvent::new(2.0, 0.01, 600.0, Waveform::Sine, 0.5, 0.01).envelope;
        assert!((env.ramp() - 0.005).abs() < 1e-12);

        let points = env.points();
        assert!(points.windows(2).all(|w| w[0].0 <= w[1].0), "{:?}", points);
        assert!((points[1].0 - 2.005).abs() < 1e-12);
        assert!((points[2].0 - 2.005).abs() < 1e-12);
        assert!((env.gain_at(2.0025) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_waveform_names() {
        assert_eq!(Waveform::Sine.as_str(), "sine");
        assert_eq!(Waveform::Sawtooth.as_str(), "sawtooth");
    }
}
