//! Timing and tone configuration.
//!
//! All Morse durations derive from [`UNIT_SECONDS`]. The scheduler reads
//! these through [`ScheduleConfig`] so hosts can override them.

/// Duration of one Morse unit (one dot) in seconds
pub const UNIT_SECONDS: f64 = 0.08;

/// Lead-in before the first tone, in seconds
pub const LEAD_IN_SECONDS: f64 = 0.1;

/// Tone pitch in Hz
pub const TONE_FREQUENCY_HZ: f32 = 600.0;

/// Maximum detune under interference, in Hz (applied as ±)
pub const INTERFERENCE_DETUNE_HZ: f32 = 50.0;

/// Linear fade-in/fade-out length, in seconds
pub const FADE_SECONDS: f64 = 0.01;

/// Envelope peak for a clean tone
pub const PEAK_GAIN: f32 = 0.5;

/// Envelope peak under interference
pub const INTERFERENCE_PEAK_GAIN: f32 = 0.3;

/// Units energized by a dot
pub const DOT_UNITS: u32 = 1;

/// Units energized by a dash
pub const DASH_UNITS: u32 = 3;

/// Silence between parts of one letter
pub const ELEMENT_GAP_UNITS: u32 = 1;

/// Silence between letters
pub const LETTER_GAP_UNITS: u32 = 3;

/// Silence between words
pub const WORD_GAP_UNITS: u32 = 7;

/// Audio scheduler configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Unit duration in seconds
    pub unit_seconds: f64,
    /// Delay between "now" and the first tone, in seconds
    pub lead_in_seconds: f64,
    /// Tone pitch in Hz
    pub frequency_hz: f32,
    /// Maximum detune under interference (±Hz)
    pub detune_hz: f32,
    /// Envelope fade length in seconds
    pub fade_seconds: f64,
    /// Envelope peak (clean)
    pub peak_gain: f32,
    /// Envelope peak (interference)
    pub interference_peak_gain: f32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            unit_seconds: UNIT_SECONDS,
            lead_in_seconds: LEAD_IN_SECONDS,
            frequency_hz: TONE_FREQUENCY_HZ,
            detune_hz: INTERFERENCE_DETUNE_HZ,
            fade_seconds: FADE_SECONDS,
            peak_gain: PEAK_GAIN,
            interference_peak_gain: INTERFERENCE_PEAK_GAIN,
        }
    }
}

impl ScheduleConfig {
    /// Set the unit duration.
    #[must_use]
    pub fn with_unit_seconds(mut self, unit_seconds: f64) -> Self {
        self.unit_seconds = unit_seconds;
        self
    }

    /// Set the lead-in.
    #[must_use]
    pub fn with_lead_in(mut self, lead_in_seconds: f64) -> Self {
        self.lead_in_seconds = lead_in_seconds;
        self
    }

    /// Set the tone pitch.
    #[must_use]
    pub fn with_frequency(mut self, frequency_hz: f32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Envelope peak for the given mode.
    #[must_use]
    pub fn peak(&self, interference: bool) -> f32 {
        if interference {
            self.interference_peak_gain
        } else {
            self.peak_gain
        }
    }

    /// Convert a unit count to seconds.
    #[must_use]
    pub fn seconds(&self, units: u32) -> f64 {
        f64::from(units) * self.unit_seconds
    }
}
